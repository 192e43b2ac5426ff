//! Core domain types: marks, cells, and the board.

use crate::game::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Draws a mark with even odds.
    ///
    /// The generator is injected so callers can pin the draw with a
    /// seeded RNG.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) { Mark::X } else { Mark::O }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

/// Error from writing to a cell that already holds a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cell {_0} has already been played")]
pub struct CellOccupied(pub Position);

impl std::error::Error for CellOccupied {}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major and written at most once each; a mark is
/// never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks whether the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Records a mark at the given position.
    ///
    /// # Errors
    ///
    /// Refuses with [`CellOccupied`] if the cell is not empty; the board
    /// is left untouched.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), CellOccupied> {
        match self.cells[pos.index()] {
            Cell::Empty => {
                self.cells[pos.index()] = Cell::Occupied(mark);
                Ok(())
            }
            Cell::Occupied(_) => Err(CellOccupied(pos)),
        }
    }

    /// Returns all cells in board order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as the fixed 3x3 text layout.
    ///
    /// Empty cells show their 1-9 number, occupied cells their mark.
    /// Every occupant token is followed by one space and every row by a
    /// newline; this exact shape is what players and tests see.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(21);
        for (i, cell) in self.cells.iter().enumerate() {
            let token = match cell {
                Cell::Empty => (b'1' + i as u8) as char,
                Cell::Occupied(Mark::X) => 'X',
                Cell::Occupied(Mark::O) => 'O',
            };
            out.push(token);
            out.push(' ');
            if i % 3 == 2 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
