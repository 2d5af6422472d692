//! Piece identity: color, rank, and cell contents.
//!
//! ## Promotion
//!
//! Promotion is one-directional and happens in place:
//! - A `Man` reaching the far edge (`Color::promotion_row`) becomes a `King`.
//! - A `King` reaching its own starting edge (`Color::home_row`) becomes a
//!   `TripleKing`.
//!
//! The two edges differ for every color, so at most one tier can be gained
//! per landing. A `TripleKing` never changes again.

use serde::{Deserialize, Serialize};

/// Piece color. Black moves first and starts on rows 5-7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing color.
    ///
    /// ```
    /// use flying_checkers::Color;
    ///
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The far edge where a man of this color is crowned king.
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 7,
        }
    }

    /// The starting edge where a king of this color becomes a triple king.
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Color::Black => 7,
            Color::White => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Promotion tier of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Unpromoted checker.
    Man,
    /// Crowned at the far edge.
    King,
    /// A king that returned to its home edge.
    TripleKing,
}

/// A checker on the board: color plus promotion tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    /// Create an unpromoted piece.
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    /// Create a piece with an explicit rank.
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Apply the promotion ceremonies for a piece landing on `row`.
    ///
    /// Checked only at the destination square, after relocation.
    ///
    /// ```
    /// use flying_checkers::{Color, Piece, Rank};
    ///
    /// let man = Piece::man(Color::Black);
    /// let king = man.crowned_at(0);
    /// assert_eq!(king.rank, Rank::King);
    ///
    /// // The same king returning home becomes a triple king.
    /// assert_eq!(king.crowned_at(7).rank, Rank::TripleKing);
    ///
    /// // Anywhere else, nothing changes.
    /// assert_eq!(man.crowned_at(3), man);
    /// ```
    #[must_use]
    pub fn crowned_at(self, row: usize) -> Self {
        match self.rank {
            Rank::Man if row == self.color.promotion_row() => Self {
                rank: Rank::King,
                ..self
            },
            Rank::King if row == self.color.home_row() => Self {
                rank: Rank::TripleKing,
                ..self
            },
            _ => self,
        }
    }
}

/// Contents of one board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// Check whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying piece, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Check whether the cell holds a piece of `color`, of any rank.
    #[must_use]
    pub fn has_color(self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color == color)
    }
}
