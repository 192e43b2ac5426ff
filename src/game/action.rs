//! Moves as first-class domain events.

use crate::game::position::Position;
use crate::game::types::Mark;
use serde::{Deserialize, Serialize};

/// A single placement of a mark into a cell.
///
/// Carrying the mark alongside the position lets the engine reject a
/// move made out of turn instead of trusting the caller. Moves can be
/// serialized for replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The target cell.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.mark, self.position)
    }
}

/// Rejection of a move by the engine.
///
/// Both variants are filtered out by the input validator in normal play,
/// so reaching one past validation means an invariant is broken upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {_0} has already been played")]
    CellOccupied(Position),
    /// The move's mark does not match the player to move.
    #[display("it is not Player {_0}'s turn")]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}
