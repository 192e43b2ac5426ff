//! Named board positions.

use serde::{Deserialize, Serialize};

/// A cell position on the board, row-major from the top-left.
///
/// Players name positions by the numbers 1-9; the board is indexed 0-8
/// internally. Conversion happens only at the input/output boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1).
    TopLeft,
    /// Top-center (cell 2).
    TopCenter,
    /// Top-right (cell 3).
    TopRight,
    /// Middle-left (cell 4).
    MiddleLeft,
    /// Center (cell 5).
    Center,
    /// Middle-right (cell 6).
    MiddleRight,
    /// Bottom-left (cell 7).
    BottomLeft,
    /// Bottom-center (cell 8).
    BottomCenter,
    /// Bottom-right (cell 9).
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index, 0-8.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Player-visible cell number, 1-9.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a player-visible cell number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::from_index(i as usize))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
