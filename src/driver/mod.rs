//! Interactive command-line play.
//!
//! The driver reads named options, asks who moves first, then alternates
//! human and computer turns on a k-in-a-row board until the game ends.
//! Everything here talks to the search core through `Agent` and
//! `GameState` only.

mod options;
mod session;

pub use options::{AgentKind, FirstMover, GameKind, Options};
pub use session::{Outcome, Session};

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::core::{ConfigError, RulesError, SearchError};

/// A game could not be played to the end.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game ended")]
    InputClosed,

    #[error("agent returned no move on an unfinished board")]
    NoMove,
}

/// Play one game with `options`, reading human input from `input`.
///
/// Asks who goes first unless `options.first` is set. Returns the outcome
/// after printing the final board and verdict to `output`.
pub fn run<R: BufRead, W: Write>(
    options: &Options,
    mut input: R,
    mut output: W,
) -> Result<Outcome, DriverError> {
    let first = match options.first {
        Some(first) => first,
        None => {
            write!(output, "Who should go first, you (1) or I/computer (0): ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(DriverError::InputClosed);
            }
            FirstMover::from_prompt(&line)?
        }
    };

    let agent = options.build_agent()?;
    let computer = first.computer_mark();
    log::info!(
        "{} with {} agent at depth {}, computer plays {}",
        options.game,
        options.agent,
        options.depth,
        computer
    );

    let mut session = Session::new(agent, computer, input, output);
    let (_, outcome) = session.play(options.game.rules())?;
    Ok(outcome)
}
