//! Game rules: pure functions over board state.
//!
//! Rules are separated from board storage so win and draw detection
//! can be exercised on any board, not just one mid-game.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{Line, check_winner};
