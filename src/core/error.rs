//! Error kinds for the game engine.
//!
//! The original design signaled failures through module-level exceptions;
//! here every fallible call returns a `Result` carrying one of these three
//! kinds. All errors are raised before any mutation, except the
//! zero-capture continuation guard, which rolls the relocation back before
//! returning. A failed call therefore always leaves the board cell-for-cell
//! unchanged.

use serde::{Deserialize, Serialize};

/// Reasons a move or query can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameError {
    /// The actor name has never been registered.
    UnknownPlayer,
    /// The actor moved out of turn with no capture continuation pending,
    /// or a continuation move captured nothing.
    TurnViolation,
    /// A coordinate is off the board, or the source square does not hold a
    /// piece of the actor's color.
    IllegalSquare,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::UnknownPlayer => write!(f, "player is not registered"),
            GameError::TurnViolation => {
                write!(f, "move out of turn with no capture continuation")
            }
            GameError::IllegalSquare => {
                write!(f, "square is off the board or holds no piece of yours")
            }
        }
    }
}

impl std::error::Error for GameError {}
