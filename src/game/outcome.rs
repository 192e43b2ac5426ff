//! Terminal game outcomes.

use crate::game::rules::Line;
use crate::game::types::Mark;
use serde::{Deserialize, Serialize};

/// Why a game was cut short.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum AbortReason {
    /// The player asked to quit at the input prompt.
    #[display("quit")]
    Quit,
}

/// The terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The line that mark holds.
        line: Line,
    },
    /// The board filled with no line complete.
    Draw,
    /// The game was abandoned before reaching a result.
    Aborted(AbortReason),
}

impl Outcome {
    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner { mark, .. } => Some(*mark),
            Outcome::Draw | Outcome::Aborted(_) => None,
        }
    }

    /// Returns true if the game ended in a tie.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { mark, line } => {
                let [a, b, c] = line.positions();
                write!(
                    f,
                    "Congratulations, Player {mark}! You won with {mark}s in the following numbered cells: {a}, {b}, and {c}."
                )
            }
            Outcome::Draw => f.write_str("This game ended in a tie."),
            Outcome::Aborted(AbortReason::Quit) => {
                f.write_str("You have quit the game. Goodbye.")
            }
        }
    }
}
