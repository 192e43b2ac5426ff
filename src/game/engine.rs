//! Phase types for the turn engine.
//!
//! Each phase of a game is a distinct type and every transition consumes
//! the previous phase, so a finished game cannot accept moves and an
//! outcome is always present once play ends.

use crate::game::action::{Move, MoveError};
use crate::game::invariants::assert_invariants;
use crate::game::outcome::{AbortReason, Outcome};
use crate::game::rules;
use crate::game::types::{Board, Mark};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// A game that has not started: empty board, no history.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a fresh game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Starts play with the given mark moving first.
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> GameInProgress {
        debug!(%first, "game started");
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// A game accepting moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
}

impl GameInProgress {
    /// Applies a move, consuming this phase and yielding the next.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotYourTurn`] and [`MoveError::CellOccupied`] are
    /// rejected before any state changes. Neither can occur when moves
    /// come through the input validator, so callers treat them as a
    /// broken invariant rather than a condition to recover from.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(mut self, action: Move) -> Result<Turn, MoveError> {
        if action.mark != self.to_move {
            return Err(MoveError::NotYourTurn(action.mark));
        }
        self.board
            .place(action.position, action.mark)
            .map_err(|occupied| MoveError::CellOccupied(occupied.0))?;
        self.history.push(action);

        if let Some((mark, line)) = rules::check_winner(&self.board) {
            return Ok(Turn::Finished(GameFinished {
                board: self.board,
                history: self.history,
                outcome: Outcome::Winner { mark, line },
            }));
        }

        if rules::is_full(&self.board) {
            return Ok(Turn::Finished(GameFinished {
                board: self.board,
                history: self.history,
                outcome: Outcome::Draw,
            }));
        }

        self.to_move = self.to_move.opponent();
        assert_invariants(&self);
        Ok(Turn::InProgress(self))
    }

    /// Ends the game early without touching the board or history.
    #[instrument(skip(self))]
    pub fn abort(self, reason: AbortReason) -> GameFinished {
        debug!(%reason, "game aborted");
        GameFinished {
            board: self.board,
            history: self.history,
            outcome: Outcome::Aborted(reason),
        }
    }

    /// The mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied so far; its length is the move count.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Replays a move sequence from a fresh game.
    #[instrument]
    pub fn replay(first: Mark, moves: &[Move]) -> Result<Turn, MoveError> {
        let mut game = GameSetup::new().start(first);
        for action in moves {
            match game.make_move(*action)? {
                Turn::InProgress(next) => game = next,
                finished @ Turn::Finished(_) => return Ok(finished),
            }
        }
        Ok(Turn::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// A game that has ended.
///
/// The outcome is always present, not an `Option`; reaching this type
/// is proof the game terminated.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// The terminal outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied over the whole game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Result
// ─────────────────────────────────────────────────────────────

/// Result of applying one move.
#[derive(Debug)]
pub enum Turn {
    /// Play continues with the other mark.
    InProgress(GameInProgress),
    /// The move ended the game.
    Finished(GameFinished),
}
