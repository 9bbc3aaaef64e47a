//! Rules engine for the board game 'Connect 4'
//!
//! Pieces are dropped into the columns of a [`Grid`](grid::Grid) and settle
//! on top of the existing stack. After each placement the
//! [`WinDetector`](win_detector::WinDetector) decides whether the new piece
//! completes a line, looking only at the lines that pass through it.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_rules::{grid::*, win_detector::*};
//!
//! let mut grid = Grid::new();
//! let detector = WinDetector::new();
//!
//! for _ in 0..3 {
//!     grid.place_piece(3, Mark::PlayerOne);
//! }
//!
//! let placement = grid.place_piece(3, Mark::PlayerOne);
//! assert_eq!(placement, Placement::Placed { row: 3, column: 3 });
//! assert_eq!(
//!     detector.evaluate(&grid, 3, 3),
//!     WinResult::Win { orientation: Orientation::Vertical, length: 4 }
//! );
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod win_detector;

pub mod game;

pub mod input;

pub mod self_check;

pub mod logging;


pub use game::{Game, GameState};
pub use grid::{Cell, Grid, Mark, Placement};
pub use input::{read_move, MoveInput};
pub use win_detector::{Orientation, WinDetector, WinResult};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 7;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

// a line of WIN_LENGTH must fit on the board in every orientation
const_assert!(WIN_LENGTH >= 1);
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
// moves are recorded as single digits
const_assert!(WIDTH <= 9);
