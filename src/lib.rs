//! # flying-checkers
//!
//! Rules engine for American checkers (draughts) on an 8x8 board, in the
//! permissive "flying" variant: moves are validated for turn order and
//! ownership, not for diagonal geometry, and a capture sweep removes every
//! opposing piece on the straight path between source and destination.
//! Kings that return to their home edge are promoted a second time, to
//! triple kings.
//!
//! ## Design Principles
//!
//! 1. **One mutating operation**: the board changes only through
//!    `Checkers::attempt_move`. Everything else is a read-only query.
//!
//! 2. **Errors as values**: every failure is one of three `GameError`
//!    kinds returned through `Result`, raised before any mutation (the
//!    continuation guard rolls back the one mutation it makes first).
//!
//! 3. **Validate, don't enumerate**: the engine judges a single proposed
//!    move; it never generates legal moves and never forces captures.
//!
//! ## Modules
//!
//! - `core`: colors, ranks, pieces, cells, squares, errors
//! - `board`: the 8x8 grid, initial layout, counting, debug rendering
//! - `players`: registration and the read-only statistics view
//! - `game`: turn sequencing and the move engine
//!
//! ## Example
//!
//! ```
//! use flying_checkers::{Checkers, Color};
//!
//! let mut game = Checkers::new();
//! let ada = game.register_player("Ada", Color::Black);
//! game.register_player("Bram", Color::White);
//!
//! game.attempt_move("Ada", (5, 2), (4, 1)).unwrap();
//! game.attempt_move("Bram", (2, 3), (3, 2)).unwrap();
//!
//! // Black jumps the white man that just advanced, landing on the square
//! // it vacated.
//! let captures = game.attempt_move("Ada", (4, 1), (2, 3)).unwrap();
//! assert_eq!(captures, 1);
//! assert_eq!(ada.captured_pieces_count(&game), 1);
//! assert!(game.winner().is_none());
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod players;

// Re-export commonly used types
pub use crate::board::{Board, BOARD_SIZE, PIECES_PER_SIDE};
pub use crate::core::{Cell, Color, GameError, Piece, Rank, Square};
pub use crate::game::{Checkers, LastTurn, TurnState};
pub use crate::players::{Player, PlayerRegistry};
