//! Terminal-backed input and output.

use super::{Input, Output};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::debug;

/// Reads player input from stdin, one line per prompt.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    /// Creates a stdin-backed input source.
    pub fn new() -> Self {
        Self
    }
}

impl Input for ConsoleInput {
    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(prompt.as_bytes())
                .context("failed to show prompt")?;
            stdout.flush().context("failed to flush prompt")?;
        }

        let mut buf = String::new();
        let bytes = io::stdin()
            .read_line(&mut buf)
            .context("failed to read input")?;
        if bytes == 0 {
            anyhow::bail!("input stream closed");
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        debug!(input = %buf, "line read");
        Ok(Some(buf))
    }
}

/// Writes game text to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Creates a stdout-backed display.
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn line(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}").context("failed to write output")?;
        Ok(())
    }
}
