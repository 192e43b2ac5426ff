//! Two-player tic-tac-toe played through the terminal.
//!
//! Players take turns naming a numbered cell; the board is re-rendered
//! after every accepted move and the game ends on a completed line, a
//! full board, or a quit.
//!
//! # Architecture
//!
//! - **game**: board, move validation, win detection, and the phase-typed
//!   turn engine
//! - **io**: input/output collaborators (stdin/stdout at the terminal)
//! - **session**: the turn-taking loop wiring the two together
//!
//! # Example
//!
//! ```no_run
//! use rand::{SeedableRng, rngs::StdRng};
//! use tictactoe_cli::{ConsoleInput, ConsoleOutput, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::new(ConsoleInput::new(), ConsoleOutput::new());
//! let finished = session.run(&mut rng)?;
//! println!("{}", finished.outcome());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod io;
mod session;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - game types
pub use game::{
    AbortReason, Board, Cell, CellOccupied, GameFinished, GameInProgress, GameSetup,
    HistoryComplete, Invariant, Line, Mark, MarkParity, Move, MoveError, Outcome, Position,
    RejectReason, Turn, Verdict, assert_invariants, check_winner, is_full, validate,
};

// Crate-level exports - I/O collaborators
pub use io::{ConsoleInput, ConsoleOutput, Input, Output};

// Crate-level exports - session loop
pub use session::Session;
