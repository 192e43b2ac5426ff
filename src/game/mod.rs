mod action;
mod engine;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;
mod validator;

pub use action::{Move, MoveError};
pub use engine::{GameFinished, GameInProgress, GameSetup, Turn};
pub use invariants::{HistoryComplete, Invariant, MarkParity, assert_invariants};
pub use outcome::{AbortReason, Outcome};
pub use position::Position;
pub use rules::{Line, check_winner, is_full};
pub use types::{Board, Cell, CellOccupied, Mark};
pub use validator::{RejectReason, Verdict, validate};
