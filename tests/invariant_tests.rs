//! Property tests for the engine's board invariants.
//!
//! Random move sequences, legal or not, are fired at a standard game. The
//! engine may reject any of them; whatever it accepts must keep piece
//! counts monotonically non-increasing, and whatever it rejects must leave
//! the board untouched.

use flying_checkers::{Checkers, Color};
use proptest::prelude::*;

const ACTORS: [&str; 3] = ["Ada", "Bram", "Ghost"];

/// Coordinates deliberately range past the board edge to exercise the
/// out-of-range path.
fn arb_attempt() -> impl Strategy<Value = (usize, (usize, usize), (usize, usize))> {
    (0usize..3, (0usize..10, 0usize..10), (0usize..10, 0usize..10))
}

fn two_player_game() -> Checkers {
    let mut game = Checkers::new();
    game.register_player("Ada", Color::Black);
    game.register_player("Bram", Color::White);
    game
}

proptest! {
    #[test]
    fn piece_counts_never_increase(moves in prop::collection::vec(arb_attempt(), 1..80)) {
        let mut game = two_player_game();
        let mut black = game.board().count_color(Color::Black);
        let mut white = game.board().count_color(Color::White);

        for (actor, from, to) in moves {
            let _ = game.attempt_move(ACTORS[actor], from, to);

            let b = game.board().count_color(Color::Black);
            let w = game.board().count_color(Color::White);
            prop_assert!(b <= black, "black count grew from {} to {}", black, b);
            prop_assert!(w <= white, "white count grew from {} to {}", white, w);
            black = b;
            white = w;
        }
    }

    #[test]
    fn rejected_moves_leave_the_board_unchanged(moves in prop::collection::vec(arb_attempt(), 1..80)) {
        let mut game = two_player_game();

        for (actor, from, to) in moves {
            let snapshot = game.board().clone();
            if game.attempt_move(ACTORS[actor], from, to).is_err() {
                prop_assert_eq!(game.board(), &snapshot);
            }
        }
    }

    #[test]
    fn winner_is_none_iff_both_colors_survive(moves in prop::collection::vec(arb_attempt(), 1..80)) {
        let mut game = two_player_game();

        for (actor, from, to) in moves {
            let _ = game.attempt_move(ACTORS[actor], from, to);

            let both = game.board().has_color(Color::Black)
                && game.board().has_color(Color::White);
            prop_assert_eq!(game.winner().is_none(), both);
        }
    }

    #[test]
    fn successful_moves_report_the_piece_deficit(moves in prop::collection::vec(arb_attempt(), 1..80)) {
        let mut game = two_player_game();

        for (actor, from, to) in moves {
            let before = game.board().total_pieces();
            if let Ok(captures) = game.attempt_move(ACTORS[actor], from, to) {
                let after = game.board().total_pieces();
                // The sweep accounts for every removed piece except a
                // destination occupant silently overwritten.
                prop_assert!(before - after >= captures);
                prop_assert!(before - after <= captures + 1);
            }
        }
    }
}
