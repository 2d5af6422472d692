//! The board state machine.
//!
//! `Checkers` owns the grid, the turn sequencing state, and the player
//! registry, and exposes exactly one mutating operation: `attempt_move`.
//! Everything else is a read-only query. `TurnState` handles alternation
//! and the continuation (double-jump) authorization.

pub mod engine;
pub mod turn;

pub use engine::Checkers;
pub use turn::{LastTurn, TurnState};
