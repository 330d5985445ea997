//! The 3x3 board: nine cells in row-major order, plus win detection.
//!
//! Cells are indexed 0-8:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Rows are 0-2 / 3-5 / 6-8, columns 0-3-6 / 1-4-7 / 2-5-8, diagonals
//! 0-4-8 / 2-4-6.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning triples: columns, rows, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The nine-cell board.
///
/// ## Example
///
/// ```
/// use ttt_series::core::{Board, Cell, Mark};
///
/// let mut board = Board::new();
/// assert!(board.cell(4).is_empty());
///
/// board.place(4, Mark::X);
/// assert_eq!(board.cell(4), Cell::Taken(Mark::X));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at `index`.
    ///
    /// Panics if `index` is out of range; indices come from a fixed
    /// nine-cell layout, so an out-of-range index is a caller bug.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Place `mark` at `index`, overwriting whatever is there.
    ///
    /// Occupancy checks belong to the engine, not the board; this is
    /// the raw write.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::from(mark);
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Check whether every cell is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Find a winning triple for `mark`, if one exists.
    ///
    /// Tests all eight lines in `WIN_LINES` order and returns the first
    /// triple fully occupied by `mark`.
    #[must_use]
    pub fn winning_line(&self, mark: Mark) -> Option<[usize; 3]> {
        WIN_LINES
            .iter()
            .find(|line| line.iter().all(|&i| self.cells[i] == Cell::Taken(mark)))
            .copied()
    }

    /// Check whether `mark` has three in a row.
    #[must_use]
    pub fn has_win(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// Indices of all empty cells.
    ///
    /// At most nine entries, so the result never heap-allocates.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[usize; CELL_COUNT]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Iterate over all cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
