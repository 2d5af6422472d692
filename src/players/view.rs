//! Read-only per-player statistics.

use serde::{Deserialize, Serialize};

use crate::board::PIECES_PER_SIDE;
use crate::core::{Color, Rank};
use crate::game::Checkers;

/// Handle for a registered `(name, color)` pair.
///
/// Every statistic is recomputed on demand from the live board, never
/// cached, so a handle can be held across moves and always reads current
/// state. The handle holds no reference into the game; callers pass the
/// game in by shared reference, which keeps the view strictly read-only.
///
/// ```
/// use flying_checkers::{Checkers, Color};
///
/// let mut game = Checkers::new();
/// let ada = game.register_player("Ada", Color::Black);
///
/// assert_eq!(ada.name(), "Ada");
/// assert_eq!(ada.king_count(&game), 0);
/// assert_eq!(ada.captured_pieces_count(&game), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub(crate) fn new(name: String, color: Color) -> Self {
        Self { name, color }
    }

    /// The registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Number of this player's kings currently on the board.
    #[must_use]
    pub fn king_count(&self, game: &Checkers) -> u32 {
        game.board().count_rank(self.color, Rank::King)
    }

    /// Number of this player's triple kings currently on the board.
    #[must_use]
    pub fn triple_king_count(&self, game: &Checkers) -> u32 {
        game.board().count_rank(self.color, Rank::TripleKing)
    }

    /// Opposing pieces no longer on the board.
    ///
    /// Assumes the standard 12-per-side start; saturates rather than
    /// underflowing on non-standard positions.
    #[must_use]
    pub fn captured_pieces_count(&self, game: &Checkers) -> u32 {
        PIECES_PER_SIDE.saturating_sub(game.board().count_color(self.color.opponent()))
    }
}
