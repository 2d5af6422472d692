//! Turn sequencing and continuation authorization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Color;

/// The previous completed turn: who moved and how many pieces they took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTurn {
    pub color: Color,
    pub captures: u32,
}

/// Current turn plus the record used to authorize double jumps.
///
/// Black moves first. `last` starts out empty and is written at the end of
/// every successful move, including zero-capture ones; it is consulted only
/// when an actor calls out of turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    current: Color,
    last: Option<LastTurn>,
}

impl TurnState {
    /// Fresh state: Black to move, no history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Color::Black,
            last: None,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub const fn current(&self) -> Color {
        self.current
    }

    /// The previous completed turn, if any.
    #[must_use]
    pub const fn last(&self) -> Option<LastTurn> {
        self.last
    }

    /// Authorize `color` to move now.
    ///
    /// In turn: granted. Out of turn: granted only as a continuation, when
    /// the previous turn was this color's own and captured at least one
    /// piece; the turn then silently advances to the actor. The advance is
    /// eager and is not undone if the continuation move later fails its
    /// capture requirement, matching the original engine.
    pub(crate) fn grant(&mut self, color: Color) -> bool {
        if color == self.current {
            return true;
        }
        match self.last {
            Some(last) if last.color == color && last.captures > 0 => {
                debug!(%color, "continuation turn granted");
                self.current = self.current.opponent();
                true
            }
            _ => false,
        }
    }

    /// Whether a move by `color` right now is a same-actor follow-up.
    ///
    /// Gates the zero-capture revert: a follow-up that takes nothing is
    /// rejected. Note this looks only at who moved last, not at the capture
    /// count.
    pub(crate) fn is_continuation(&self, color: Color) -> bool {
        matches!(self.last, Some(last) if last.color == color)
    }

    /// Record a completed move and flip the turn.
    ///
    /// The flip is unconditional; keeping the turn is only ever achieved
    /// through the continuation path in `grant` on the next call.
    pub(crate) fn complete(&mut self, color: Color, captures: u32) {
        self.last = Some(LastTurn { color, captures });
        self.current = self.current.opponent();
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_moves_first() {
        let turn = TurnState::new();
        assert_eq!(turn.current(), Color::Black);
        assert_eq!(turn.last(), None);
    }

    #[test]
    fn test_in_turn_grant() {
        let mut turn = TurnState::new();
        assert!(turn.grant(Color::Black));
        assert!(!turn.grant(Color::White));
    }

    #[test]
    fn test_complete_flips_and_records() {
        let mut turn = TurnState::new();
        turn.complete(Color::Black, 2);

        assert_eq!(turn.current(), Color::White);
        assert_eq!(
            turn.last(),
            Some(LastTurn {
                color: Color::Black,
                captures: 2
            })
        );
    }

    #[test]
    fn test_continuation_grant_after_capture() {
        let mut turn = TurnState::new();
        turn.complete(Color::Black, 1);

        // Black again, out of turn, but the last turn was Black's own
        // capture: granted, and the turn advances back to Black.
        assert!(turn.grant(Color::Black));
        assert_eq!(turn.current(), Color::Black);
    }

    #[test]
    fn test_no_continuation_without_capture() {
        let mut turn = TurnState::new();
        turn.complete(Color::Black, 0);

        assert!(!turn.grant(Color::Black));
        assert_eq!(turn.current(), Color::White);
    }

    #[test]
    fn test_opponent_unaffected_by_capture() {
        let mut turn = TurnState::new();
        turn.complete(Color::Black, 3);

        // A capture never skips the opponent's ordinary turn.
        assert!(turn.grant(Color::White));
    }

    #[test]
    fn test_is_continuation_ignores_capture_count() {
        let mut turn = TurnState::new();
        turn.complete(Color::Black, 0);

        assert!(turn.is_continuation(Color::Black));
        assert!(!turn.is_continuation(Color::White));
    }
}
