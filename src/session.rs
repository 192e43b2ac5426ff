//! The turn-taking loop.
//!
//! A session owns one game from start to finish: it prompts the current
//! player for a cell, validates the answer, applies the move, and reports
//! the result. Board and history live inside whichever engine phase the
//! session currently holds; nothing is shared.

use crate::game::{
    AbortReason, Board, GameFinished, GameInProgress, GameSetup, Mark, Move, Position, Turn,
    Verdict, validate,
};
use crate::io::{Input, Output};
use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, instrument};

/// Shown once before the first prompt.
const INSTRUCTIONS: &str = "Instructions for Play:\n======================\nNumbers denote unfilled cells. Xs and Os denote cells that have already been played.";

/// Runs one game between two players at the same terminal.
pub struct Session<I, O> {
    input: I,
    output: O,
}

impl<I: Input, O: Output> Session<I, O> {
    /// Creates a session over the given collaborators.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Plays a single game to its end.
    ///
    /// The starting mark is drawn from `rng` with even odds. Returns the
    /// finished game so callers can inspect the final board, history, and
    /// outcome.
    #[instrument(skip_all)]
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<GameFinished> {
        let first = Mark::random(rng);
        info!(%first, "starting a new game");

        let mut game = GameSetup::new().start(first);
        self.output.line(INSTRUCTIONS)?;
        self.output.line(&game.board().render())?;
        self.output
            .line(&format!("The starting player is Player {first}."))?;

        loop {
            let mark = game.to_move();
            let Some(position) = self.await_move(&game)? else {
                let finished = game.abort(AbortReason::Quit);
                info!("player quit");
                self.output.line(&finished.outcome().to_string())?;
                return Ok(finished);
            };

            match game
                .make_move(Move::new(mark, position))
                .context("validated move was rejected by the engine")?
            {
                Turn::InProgress(next) => {
                    self.acknowledge(mark, next.history().len(), next.board())?;
                    game = next;
                }
                Turn::Finished(finished) => {
                    self.acknowledge(mark, finished.history().len(), finished.board())?;
                    info!(outcome = %finished.outcome(), "game over");
                    self.output.line(&finished.outcome().to_string())?;
                    return Ok(finished);
                }
            }
        }
    }

    /// Prompts until the validator produces a move or a quit.
    ///
    /// Returns `None` when the player quits.
    fn await_move(&mut self, game: &GameInProgress) -> Result<Option<Position>> {
        let prompt = format!(
            "Player {mark}, which numbered cell do you want to make an '{mark}' in? Enter 'q' to quit: ",
            mark = game.to_move()
        );
        loop {
            let raw = self.input.read(&prompt)?;
            match validate(raw.as_deref(), game.board()) {
                Verdict::Valid(position) => return Ok(Some(position)),
                Verdict::Quit => return Ok(None),
                Verdict::Invalid(reason) => {
                    self.output.line(&format!("Sorry, {reason}."))?;
                }
            }
        }
    }

    /// Reports an accepted move: the acknowledgment first, then the board.
    fn acknowledge(&mut self, mark: Mark, move_number: usize, board: &Board) -> Result<()> {
        self.output.line(&format!(
            "Thanks for your move, Player {mark}. (move #{move_number})"
        ))?;
        self.output.line(&board.render())?;
        Ok(())
    }
}
