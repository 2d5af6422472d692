//! The 8x8 checkerboard.
//!
//! `Board` is plain data: cell storage, the standard initial layout, piece
//! counting, and a textual debug rendering. All rule enforcement lives in
//! the `game` module; the board itself never rejects a mutation.

pub mod grid;

pub use grid::{Board, BOARD_SIZE, PIECES_PER_SIDE};
