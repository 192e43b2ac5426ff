//! Logical properties that must hold throughout a game.
//!
//! Invariants are testable independently and double as documentation of
//! the guarantees the engine maintains. They are asserted after every
//! accepted move in debug builds.

use crate::game::engine::GameInProgress;
use crate::game::types::{Board, Cell, Mark};
use tracing::warn;

/// A property of game state that must never be violated.
pub trait Invariant<S> {
    /// Checks whether the property holds.
    fn holds(state: &S) -> bool;

    /// What the property guarantees.
    fn description() -> &'static str;
}

/// Marks alternate, so the X and O totals differ by at most one.
pub struct MarkParity;

impl Invariant<Board> for MarkParity {
    fn holds(board: &Board) -> bool {
        let x = board
            .cells()
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(Mark::X)))
            .count();
        let o = board
            .cells()
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(Mark::O)))
            .count();
        let balanced = x.abs_diff(o) <= 1;
        if !balanced {
            warn!(x, o, "mark counts out of balance");
        }
        balanced
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

/// Every occupied cell is accounted for by the move history.
pub struct HistoryComplete;

impl Invariant<GameInProgress> for HistoryComplete {
    fn holds(game: &GameInProgress) -> bool {
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|c| !matches!(c, Cell::Empty))
            .count();
        let moves = game.history().len();
        let complete = occupied == moves;
        if !complete {
            warn!(occupied, moves, "history does not cover the board");
        }
        complete
    }

    fn description() -> &'static str {
        "occupied cell count equals the move count"
    }
}

/// Asserts the game invariants (debug builds only).
pub fn assert_invariants(game: &GameInProgress) {
    debug_assert!(
        MarkParity::holds(game.board()),
        "{}",
        MarkParity::description()
    );
    debug_assert!(
        HistoryComplete::holds(game),
        "{}",
        HistoryComplete::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::{GameSetup, Turn};
    use crate::game::action::Move;
    use crate::game::position::Position;

    #[test]
    fn test_invariants_hold_for_fresh_game() {
        let game = GameSetup::new().start(Mark::X);
        assert!(MarkParity::holds(game.board()));
        assert!(HistoryComplete::holds(&game));
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopRight),
        ];
        match GameInProgress::replay(Mark::X, &moves) {
            Ok(Turn::InProgress(game)) => {
                assert!(MarkParity::holds(game.board()));
                assert!(HistoryComplete::holds(&game));
            }
            other => panic!("expected game in progress, got {other:?}"),
        }
    }

    #[test]
    fn test_parity_detects_corruption() {
        let game = GameSetup::new().start(Mark::X);
        let mut game = match game.make_move(Move::new(Mark::X, Position::Center)) {
            Ok(Turn::InProgress(game)) => game,
            other => panic!("expected game in progress, got {other:?}"),
        };
        // Sneak two extra X marks past the engine.
        game.board.place(Position::TopLeft, Mark::X).unwrap();
        game.board.place(Position::TopRight, Mark::X).unwrap();
        assert!(!MarkParity::holds(game.board()));
    }

    #[test]
    fn test_history_detects_untracked_mark() {
        let game = GameSetup::new().start(Mark::X);
        let mut game = match game.make_move(Move::new(Mark::X, Position::Center)) {
            Ok(Turn::InProgress(game)) => game,
            other => panic!("expected game in progress, got {other:?}"),
        };
        game.board.place(Position::TopLeft, Mark::O).unwrap();
        assert!(!HistoryComplete::holds(&game));
    }
}
