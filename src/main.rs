//! Console tic-tac-toe for two players at one keyboard.

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tictactoe_cli::{Cli, ConsoleInput, ConsoleOutput, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr so trace lines never interleave with game output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(ConsoleInput::new(), ConsoleOutput::new());
    let finished = session.run(&mut rng)?;
    info!(
        outcome = %finished.outcome(),
        moves = finished.history().len(),
        "session ended"
    );

    Ok(())
}
