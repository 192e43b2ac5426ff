//! Input and output collaborators.
//!
//! The session talks to the player through these two traits, so a game
//! can be driven from stdin at the terminal or from scripted sources in
//! tests.

mod console;

pub use console::{ConsoleInput, ConsoleOutput};

use anyhow::Result;

/// Supplies one line of raw player input per request.
pub trait Input {
    /// Presents the prompt and returns the player's answer.
    ///
    /// `None` means the source declined to answer; the validator treats
    /// that like any other unrecognized input. Failing outright (for
    /// example on a closed stream) ends the session.
    fn read(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read(prompt)
    }
}

/// Displays game text to the player.
pub trait Output {
    /// Shows one block of text, terminated by a line break.
    fn line(&mut self, text: &str) -> Result<()>;
}

impl<T: Output + ?Sized> Output for &mut T {
    fn line(&mut self, text: &str) -> Result<()> {
        (**self).line(text)
    }
}
