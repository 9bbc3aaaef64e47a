//! Detection of winning lines
//!
//! Only lines passing through the most recently placed piece can change
//! from "not winning" to "winning", so [`WinDetector::evaluate`] walks out
//! from that anchor along the four orientations and stops as soon as the
//! run is long enough. The cost is bounded by the win length, not by the
//! board size.
//!
//! [`WinDetector::scan`] re-examines every line on the board and exists to
//! cross-check the incremental result.

use crate::grid::{Cell, Grid};
use crate::WIN_LENGTH;

/// The four directions a line can run in
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
    /// bottom-left to top-right
    DiagonalAscending,
    /// top-left to bottom-right
    DiagonalDescending,
}

impl Orientation {
    /// Orientations in the order they are checked
    pub const ALL: [Orientation; 4] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::DiagonalAscending,
        Orientation::DiagonalDescending,
    ];

    /// One step along this orientation as (row delta, column delta)
    ///
    /// The opposite direction is the negated pair.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
            Orientation::DiagonalAscending => (1, 1),
            Orientation::DiagonalDescending => (-1, 1),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WinResult {
    NoWin,
    Win {
        orientation: Orientation,
        length: usize,
    },
}

impl WinResult {
    pub fn is_win(&self) -> bool {
        match self {
            WinResult::Win { .. } => true,
            WinResult::NoWin => false,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct WinDetector {
    win_length: usize,
}

impl WinDetector {
    pub fn new() -> Self {
        Self::with_win_length(WIN_LENGTH)
    }

    /// # Panics
    /// If `win_length` is zero.
    pub fn with_win_length(win_length: usize) -> Self {
        assert!(win_length > 0, "win length must be positive");
        Self { win_length }
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Whether the piece at `(row, column)` completes a line
    ///
    /// The reported length never exceeds the win length: counting stops as
    /// soon as the threshold is reached. An empty anchor never wins.
    ///
    /// # Panics
    /// If the coordinates are outside the grid.
    pub fn evaluate(&self, grid: &Grid, row: usize, column: usize) -> WinResult {
        let anchor = grid.get(row, column);
        if anchor.is_empty() {
            return WinResult::NoWin;
        }

        for &orientation in Orientation::ALL.iter() {
            let (d_row, d_column) = orientation.delta();
            // the anchor counts before extending in either direction
            let mut run = 1;
            run = self.extend(grid, anchor, (row, column), (d_row, d_column), run);
            run = self.extend(grid, anchor, (row, column), (-d_row, -d_column), run);

            if run >= self.win_length {
                return WinResult::Win {
                    orientation,
                    length: run,
                };
            }
        }
        WinResult::NoWin
    }

    // walk away from the anchor while cells match, never counting past the threshold
    fn extend(
        &self,
        grid: &Grid,
        anchor: Cell,
        (row, column): (usize, usize),
        (d_row, d_column): (isize, isize),
        mut run: usize,
    ) -> usize {
        let (mut r, mut c) = (row as isize + d_row, column as isize + d_column);
        while run < self.win_length && grid.get_signed(r, c) == Some(anchor) {
            run += 1;
            r += d_row;
            c += d_column;
        }
        run
    }

    /// Brute-force search of the whole grid for any winning line
    ///
    /// Every maximal run of identical marks is measured from its first cell,
    /// so the reported length is the full run length.
    pub fn scan(&self, grid: &Grid) -> WinResult {
        for &orientation in Orientation::ALL.iter() {
            let (d_row, d_column) = orientation.delta();
            for row in 0..grid.height() as isize {
                for column in 0..grid.width() as isize {
                    let cell = match grid.get_signed(row, column) {
                        Some(cell) if !cell.is_empty() => cell,
                        _ => continue,
                    };
                    // only start counting at the beginning of a run
                    if grid.get_signed(row - d_row, column - d_column) == Some(cell) {
                        continue;
                    }

                    let mut length = 1;
                    while grid.get_signed(row + d_row * length, column + d_column * length)
                        == Some(cell)
                    {
                        length += 1;
                    }
                    if length as usize >= self.win_length {
                        return WinResult::Win {
                            orientation,
                            length: length as usize,
                        };
                    }
                }
            }
        }
        WinResult::NoWin
    }
}

impl Default for WinDetector {
    fn default() -> Self {
        Self::new()
    }
}
