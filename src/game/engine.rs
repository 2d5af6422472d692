//! The checkers engine: move validation, capture sweeping, promotion,
//! and win detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::{Cell, Color, GameError, Square};
use crate::game::turn::TurnState;
use crate::players::{Player, PlayerRegistry};

/// The board state machine.
///
/// Owns the grid, the turn state, and the player registry. The board is
/// mutated exclusively through [`Checkers::attempt_move`]; every other
/// method is a read-only query.
///
/// ```
/// use flying_checkers::{Cell, Checkers, Color};
///
/// let mut game = Checkers::new();
/// let ada = game.register_player("Ada", Color::Black);
/// game.register_player("Bram", Color::White);
///
/// // Black opens with a plain diagonal step.
/// let captures = game.attempt_move("Ada", (5, 0), (4, 1)).unwrap();
/// assert_eq!(captures, 0);
/// assert_eq!(game.current_turn(), Color::White);
/// assert_eq!(game.cell_at((5, 0)).unwrap(), Cell::Empty);
/// assert_eq!(ada.captured_pieces_count(&game), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkers {
    board: Board,
    turn: TurnState,
    players: PlayerRegistry,
}

impl Checkers {
    /// New game with the standard starting position, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// New game from a custom position, with fresh turn state and an empty
    /// registry. Useful for studies and tests.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: TurnState::new(),
            players: PlayerRegistry::new(),
        }
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.turn.current()
    }

    /// The registered players.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The turn sequencing state.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Register a player and return their statistics handle.
    ///
    /// Re-registering a name overwrites its color. Nothing stops several
    /// players from sharing a color.
    pub fn register_player(&mut self, name: impl Into<String>, color: Color) -> Player {
        let name = name.into();
        self.players.register(name.clone(), color);
        Player::new(name, color)
    }

    /// Attempt to move the piece at `from` to `to` on behalf of `actor`.
    ///
    /// Validation happens in a fixed order; the first failing check decides
    /// the error:
    ///
    /// 1. Unregistered actor: [`GameError::UnknownPlayer`].
    /// 2. Out of turn with no pending capture continuation:
    ///    [`GameError::TurnViolation`].
    /// 3. Either coordinate off the board, or the source square not holding
    ///    a piece of the actor's color: [`GameError::IllegalSquare`].
    ///
    /// The move itself is not checked for diagonal geometry. The piece is
    /// relocated and the straight unit-step path from `to` back to `from`
    /// is swept, removing every opposing piece on it; the sweep length is
    /// the returned capture count. A continuation move that captures
    /// nothing is rolled back and rejected with
    /// [`GameError::TurnViolation`]. Promotion is applied at the
    /// destination, and the turn flips unconditionally.
    ///
    /// # Errors
    ///
    /// One of the three `GameError` kinds above. Failed calls leave the
    /// board cell-for-cell unchanged.
    #[instrument(skip(self))]
    pub fn attempt_move(
        &mut self,
        actor: &str,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<u32, GameError> {
        let color = self.players.color_of(actor).ok_or(GameError::UnknownPlayer)?;

        if !self.turn.grant(color) {
            return Err(GameError::TurnViolation);
        }

        let from = Square::at(from.0, from.1).ok_or(GameError::IllegalSquare)?;
        let to = Square::at(to.0, to.1).ok_or(GameError::IllegalSquare)?;

        let piece = match self.board.cell(from).piece() {
            Some(piece) if piece.color == color => piece,
            _ => return Err(GameError::IllegalSquare),
        };

        // Relocate first; the sweep below walks the already-vacated path.
        // Any prior occupant of the destination is overwritten.
        let displaced = self.board.cell(to);
        self.board.set(to, Cell::Occupied(piece));
        self.board.set(from, Cell::Empty);

        let captured = self.sweep_captures(from, to, color);
        let captures = captured.len() as u32;

        // A continuation turn must capture. The relocation is undone,
        // displaced occupant included; the eager turn advance from the
        // grant is not.
        if captures == 0 && self.turn.is_continuation(color) {
            self.board.set(to, displaced);
            self.board.set(from, Cell::Occupied(piece));
            return Err(GameError::TurnViolation);
        }

        if let Some(landed) = self.board.cell(to).piece() {
            let crowned = landed.crowned_at(to.row());
            if crowned != landed {
                debug!(square = %to, rank = ?crowned.rank, "promotion");
                self.board.set(to, Cell::Occupied(crowned));
            }
        }

        debug!(%from, %to, swept = ?captured, "move applied");
        self.turn.complete(color, captures);
        Ok(captures)
    }

    /// Contents of the square at `location`.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalSquare`] if `location` is off the board.
    pub fn cell_at(&self, location: (usize, usize)) -> Result<Cell, GameError> {
        let square = Square::at(location.0, location.1).ok_or(GameError::IllegalSquare)?;
        Ok(self.board.cell(square))
    }

    /// Name of the winning player, if the game has ended.
    ///
    /// The game ends when one color has no pieces left; the winner is the
    /// first registered player of the surviving color, in registration
    /// order. Returns `None` while both colors survive, or when no player
    /// of the surviving color was ever registered.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        let black = self.board.has_color(Color::Black);
        let white = self.board.has_color(Color::White);

        if black && white {
            return None;
        }
        if !black {
            if let Some(name) = self.players.first_of_color(Color::White) {
                return Some(name);
            }
        }
        if !white {
            return self.players.first_of_color(Color::Black);
        }
        None
    }

    /// Walk the straight unit-step path from `to` back toward `from`,
    /// removing every piece of the opposing color encountered.
    ///
    /// Each step moves one toward `from` on each axis independently, so
    /// the path covers diagonal jump chains as well as the permissive
    /// "flying" moves this engine allows.
    fn sweep_captures(&mut self, from: Square, to: Square, mover: Color) -> SmallVec<[Square; 4]> {
        let mut captured = SmallVec::new();
        let (mut row, mut col) = (to.row(), to.col());

        while (row, col) != (from.row(), from.col()) {
            if row < from.row() {
                row += 1;
            } else if row > from.row() {
                row -= 1;
            }
            if col < from.col() {
                col += 1;
            } else if col > from.col() {
                col -= 1;
            }

            let square = Square::new(row as u8, col as u8);
            if let Some(piece) = self.board.cell(square).piece() {
                if piece.color == mover.opponent() {
                    debug!(%square, color = %piece.color, "piece captured");
                    self.board.set(square, Cell::Empty);
                    captured.push(square);
                }
            }
        }

        captured
    }
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}
