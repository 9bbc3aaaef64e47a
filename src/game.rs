//! Turn order and game lifecycle around a [`Grid`]

use anyhow::{anyhow, bail, Result};
use log::debug;

use crate::grid::{Grid, Mark, Placement};
use crate::win_detector::{Orientation, WinDetector, WinResult};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won {
        winner: Mark,
        orientation: Orientation,
        length: usize,
    },
    Drawn,
}

impl GameState {
    /// Won and drawn games accept no further moves
    pub fn is_over(&self) -> bool {
        match self {
            GameState::Won { .. } | GameState::Drawn => true,
            GameState::NotStarted | GameState::InProgress => false,
        }
    }
}

/// A two-player game: the grid, whose turn it is, and how it has gone so far
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    detector: WinDetector,
    to_move: Mark,
    state: GameState,
    moves: Vec<usize>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_grid(Grid::new(), WinDetector::new())
    }

    /// A game on an empty grid of any shape
    ///
    /// # Panics
    /// If the grid already holds pieces.
    pub fn with_grid(grid: Grid, detector: WinDetector) -> Self {
        assert!(grid.num_moves() == 0, "a new game needs an empty grid");
        Self {
            grid,
            detector,
            to_move: Mark::PlayerOne,
            state: GameState::NotStarted,
            moves: Vec::new(),
        }
    }

    /// Replays a sequence of 1-indexed column digits on the standard grid, e.g. `"4453"`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut game = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = game.play_checked(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(game)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Columns played so far, 1-indexed
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Plays the current player's piece in a 1-indexed column
    ///
    /// Rejected moves leave the game exactly as it was.
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state.is_over() {
            bail!("Invalid move, the game is already over");
        }
        if column_one_indexed < 1 || column_one_indexed > self.grid.width() {
            bail!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.grid.width()
            );
        }
        let column = column_one_indexed - 1;

        let row = match self.grid.place_piece(column, self.to_move) {
            Placement::Placed { row, .. } => row,
            Placement::Full => bail!("Invalid move, column {} full", column_one_indexed),
        };

        self.state = match self.detector.evaluate(&self.grid, row, column) {
            WinResult::Win {
                orientation,
                length,
            } => GameState::Won {
                winner: self.to_move,
                orientation,
                length,
            },
            WinResult::NoWin if self.grid.is_full() => GameState::Drawn,
            WinResult::NoWin => GameState::InProgress,
        };
        if self.state.is_over() {
            debug!("game over after {} moves: {:?}", self.grid.num_moves(), self.state);
        }

        self.moves.push(column_one_indexed);
        self.to_move = self.to_move.other();

        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
