//! Raw input validation.
//!
//! The validator classifies one line of player input against the current
//! board. It never mutates anything and never corrects input; the session
//! keeps asking until something other than a rejection comes back.

use crate::game::position::Position;
use crate::game::types::Board;
use tracing::instrument;

/// Why a line of input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// Not one of the literal characters 1-9.
    #[display("please pick one of the numbered cells")]
    NotACell,
    /// The named cell already holds a mark.
    #[display("that cell has already been played")]
    CellTaken,
}

/// Classification of one line of raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A legal move target.
    Valid(Position),
    /// Rejected; the player is told why and asked again.
    Invalid(RejectReason),
    /// The player wants to stop the game.
    Quit,
}

/// Classifies raw input against the board.
///
/// `None` models an input source that declined to answer and is rejected
/// like any unrecognized string. Quitting matches the literal letter q in
/// either case, nothing else; input is not trimmed or otherwise
/// corrected. A single digit naming an empty cell is the only valid
/// move input.
#[instrument(skip(board))]
pub fn validate(raw: Option<&str>, board: &Board) -> Verdict {
    let Some(text) = raw else {
        return Verdict::Invalid(RejectReason::NotACell);
    };
    if text.eq_ignore_ascii_case("q") {
        return Verdict::Quit;
    }
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = c.to_digit(10) {
            if let Some(position) = Position::from_number(digit as u8) {
                return if board.is_empty(position) {
                    Verdict::Valid(position)
                } else {
                    Verdict::Invalid(RejectReason::CellTaken)
                };
            }
        }
    }
    Verdict::Invalid(RejectReason::NotACell)
}
