//! Board contents and gravity, with no knowledge of win conditions

use log::trace;

use crate::{HEIGHT, WIDTH};

/// One of the two players' pieces
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Mark {
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    /// The opposing player's mark
    pub fn other(self) -> Self {
        match self {
            Mark::PlayerOne => Mark::PlayerTwo,
            Mark::PlayerTwo => Mark::PlayerOne,
        }
    }

    /// The character used for this mark by [`Grid::render`]
    pub fn glyph(self) -> char {
        match self {
            Mark::PlayerOne => 'X',
            Mark::PlayerTwo => 'O',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub const EMPTY_GLYPH: char = '.';

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::PlayerOne => Some(Mark::PlayerOne),
            Cell::PlayerTwo => Some(Mark::PlayerTwo),
            Cell::Empty => None,
        }
    }

    pub fn glyph(&self) -> char {
        self.mark().map_or(Self::EMPTY_GLYPH, Mark::glyph)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::PlayerOne => Cell::PlayerOne,
            Mark::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// Outcome of dropping a piece into a column
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Placement {
    /// The piece landed at these coordinates
    Placed { row: usize, column: usize },
    /// The column has no free row, nothing was written
    Full,
}

/// A Connect 4 board under gravity
///
/// Row 0 is the bottom row. Every column's pieces form a contiguous stack
/// starting at row 0, and a piece never changes once placed.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    num_moves: usize,
}

impl Grid {
    /// An empty board of the canonical [`WIDTH`] x [`HEIGHT`]
    pub fn new() -> Self {
        Self::with_dimensions(WIDTH, HEIGHT)
    }

    /// An empty board of arbitrary shape
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            heights: vec![0; width],
            num_moves: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Number of pieces stacked in `column`
    pub fn column_height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn playable(&self, column: usize) -> bool {
        self.heights[column] < self.height
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == self.width * self.height
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    pub fn next_free_row(&self, column: usize) -> Option<usize> {
        assert!(column < self.width, "column {} out of range", column);
        if self.playable(column) {
            Some(self.heights[column])
        } else {
            None
        }
    }

    /// Drops `mark` into `column`
    ///
    /// A full column is reported as [`Placement::Full`] and leaves the board untouched.
    pub fn place_piece(&mut self, column: usize, mark: Mark) -> Placement {
        let row = match self.next_free_row(column) {
            Some(row) => row,
            None => return Placement::Full,
        };
        let index = self.index(row, column);
        self.cells[index] = mark.into();
        self.heights[column] += 1;
        self.num_moves += 1;
        trace!("{:?} placed at row {}, column {}", mark, row, column);

        Placement::Placed { row, column }
    }

    /// # Panics
    /// If the coordinates are outside the board.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.height && column < self.width,
            "cell ({}, {}) out of range",
            row,
            column
        );
        self.cells[self.index(row, column)]
    }

    /// Like [`get`](Self::get), but `None` for coordinates off the board
    pub fn get_signed(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 || row as usize >= self.height || column as usize >= self.width {
            return None;
        }
        Some(self.cells[self.index(row as usize, column as usize)])
    }

    /// Whether every column is a gap-free stack whose size matches its recorded height
    pub fn gravity_holds(&self) -> bool {
        (0..self.width).all(|column| {
            let height = self.heights[column];
            height <= self.height
                && (0..self.height).all(|row| self.get(row, column).is_empty() == (row >= height))
        })
    }

    /// Text picture of the board, top row first so row 0 ends up at the bottom
    ///
    /// ```text
    /// -1-2-3-4-5-6-7-
    /// |.|.|.|.|.|.|.|
    /// |.|.|.|X|.|.|.|
    /// |.|.|O|X|.|.|.|
    /// ---------------
    /// ```
    pub fn render(&self) -> String {
        let mut text = String::new();
        for column in 0..self.width {
            text.push('-');
            text.push_str(&((column + 1) % 10).to_string());
        }
        text.push_str("-\n");

        for row in (0..self.height).rev() {
            for column in 0..self.width {
                text.push('|');
                text.push(self.get(row, column).glyph());
            }
            text.push_str("|\n");
        }

        text.push_str(&"-".repeat(self.width * 2 + 1));
        text
    }

    fn index(&self, row: usize, column: usize) -> usize {
        column + self.width * row
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
