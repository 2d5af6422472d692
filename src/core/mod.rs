//! Core domain types: colors, ranks, pieces, cells, squares, and errors.
//!
//! These are the building blocks shared by the board and the game engine.
//! Piece identity is a tagged `(Color, Rank)` pair rather than a string tag,
//! so rank transitions are exhaustively checked at compile time.

pub mod error;
pub mod piece;
pub mod square;

pub use error::GameError;
pub use piece::{Cell, Color, Piece, Rank};
pub use square::Square;
