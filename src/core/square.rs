//! Board coordinates.
//!
//! A `Square` is a validated (row, column) pair; `Square::at` is the only
//! public constructor, so every `Square` in circulation is on the board.
//! Callers hand the engine raw `(usize, usize)` pairs and out-of-range
//! coordinates are rejected with `GameError::IllegalSquare` before any
//! mutation.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// A validated board coordinate with `row` and `col` in `0..8`.
///
/// Row 0 is White's back rank, row 7 is Black's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from raw coordinates, validating the range.
    ///
    /// ```
    /// use flying_checkers::Square;
    ///
    /// assert!(Square::at(0, 0).is_some());
    /// assert!(Square::at(7, 7).is_some());
    /// assert!(Square::at(8, 0).is_none());
    /// assert!(Square::at(0, 9).is_none());
    /// ```
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Construct without range checks. Callers guarantee `row` and `col`
    /// come from loop bounds over the grid.
    pub(crate) const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index, 0-7.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index, 0-7.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Whether this is a dark (playable) square in the standard layout.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
