//! Win detection.

use crate::game::position::Position;
use crate::game::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the 8 ways to complete three in a row.
///
/// Declaration order is the order lines are checked: rows top to bottom,
/// columns left to right, then the two diagonals. When a single move
/// completes more than one line, the first in this order is the one
/// reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Cells 1, 2, 3.
    TopRow,
    /// Cells 4, 5, 6.
    MiddleRow,
    /// Cells 7, 8, 9.
    BottomRow,
    /// Cells 1, 4, 7.
    LeftColumn,
    /// Cells 2, 5, 8.
    MiddleColumn,
    /// Cells 3, 6, 9.
    RightColumn,
    /// Cells 1, 5, 9.
    Diagonal,
    /// Cells 3, 5, 7.
    AntiDiagonal,
}

impl Line {
    /// The three positions forming this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::MiddleColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }
}

/// Finds the first complete line on the board.
///
/// Returns the mark together with the line it holds, or `None` when no
/// line is fully populated by one mark.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in Line::iter() {
        let [a, b, c] = line.positions();
        if let Cell::Occupied(mark) = board.get(a) {
            if board.get(b) == Cell::Occupied(mark) && board.get(c) == Cell::Occupied(mark) {
                return Some((mark, line));
            }
        }
    }
    None
}
