//! Command-line interface.

use clap::Parser;

/// Two-player tic-tac-toe at the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe played with numbered cells", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the starting-player draw (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}
