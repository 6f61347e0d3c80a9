//! Command-line options.

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::core::ConfigError;
use crate::games::k_in_a_row::{Board, KInARow, Mark};
use crate::search::{Agent, LogObserver, ReflexAgent, SearchAgent, SearchSettings, StrategyKind};

/// Game to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameKind {
    #[value(alias = "TicTacToe")]
    TicTacToe,
    #[value(alias = "ConnectFour")]
    ConnectFour,
}

impl GameKind {
    #[must_use]
    pub fn rules(self) -> KInARow {
        match self {
            GameKind::TicTacToe => KInARow::tic_tac_toe(),
            GameKind::ConnectFour => KInARow::connect_four(),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::TicTacToe => f.write_str("tic-tac-toe"),
            GameKind::ConnectFour => f.write_str("connect-four"),
        }
    }
}

/// Computer player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    #[value(alias = "MinimaxAgent")]
    Minimax,
    #[value(alias = "AlphaBetaAgent")]
    AlphaBeta,
    #[value(alias = "ExpectimaxAgent")]
    Expectimax,
    #[value(alias = "ReflexAgent")]
    Reflex,
}

impl AgentKind {
    /// Recursive strategy behind this agent, if it searches.
    #[must_use]
    pub fn strategy(self) -> Option<StrategyKind> {
        match self {
            AgentKind::Minimax => Some(StrategyKind::Minimax),
            AgentKind::AlphaBeta => Some(StrategyKind::AlphaBeta),
            AgentKind::Expectimax => Some(StrategyKind::Expectimax),
            AgentKind::Reflex => None,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy() {
            Some(kind) => kind.fmt(f),
            None => f.write_str("reflex"),
        }
    }
}

/// Who makes the first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FirstMover {
    Human,
    Computer,
}

impl FirstMover {
    /// Parse the answer to the first-mover prompt: `1` for human, `0` for computer.
    pub fn from_prompt(answer: &str) -> Result<Self, ConfigError> {
        match answer.trim() {
            "1" => Ok(FirstMover::Human),
            "0" => Ok(FirstMover::Computer),
            other => Err(ConfigError::InvalidFirstMover(other.to_string())),
        }
    }

    /// The computer plays X when it moves first, else O.
    #[must_use]
    pub fn computer_mark(self) -> Mark {
        match self {
            FirstMover::Computer => Mark::X,
            FirstMover::Human => Mark::O,
        }
    }
}

/// Options of the `boardgames` binary.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(
    name = "boardgames",
    version,
    about = "Play a k-in-a-row game against a search agent",
    long_about = None
)]
pub struct Options {
    /// The type of game to play
    #[arg(short = 't', long = "type", value_enum, default_value_t = GameKind::TicTacToe)]
    pub game: GameKind,

    /// The computer agent to play against
    #[arg(short, long, value_enum, default_value_t = AgentKind::Minimax)]
    pub agent: AgentKind,

    /// Search depth in plies
    #[arg(short, long, default_value_t = 2)]
    pub depth: u32,

    /// Evaluation function name
    #[arg(short, long = "eval", default_value = "score")]
    pub evaluation: String,

    /// Seed for randomized tie-breaks
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Who moves first; asked interactively when omitted
    #[arg(short, long, value_enum)]
    pub first: Option<FirstMover>,
}

impl Options {
    /// Search settings named by these options.
    #[must_use]
    pub fn settings(&self) -> SearchSettings {
        SearchSettings::default()
            .with_strategy(self.agent.strategy().unwrap_or_default())
            .with_depth(self.depth)
            .with_evaluation(self.evaluation.clone())
            .with_seed(self.seed)
    }

    /// Build the computer agent.
    pub fn build_agent(&self) -> Result<Box<dyn Agent<Board>>, ConfigError> {
        let settings = self.settings();
        let config = settings.config::<Board>()?;
        Ok(match self.agent.strategy() {
            Some(kind) => Box::new(SearchAgent::from_kind(kind, config).with_observer(LogObserver)),
            None => Box::new(ReflexAgent::new(config, settings.seed)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("boardgames").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.game, GameKind::TicTacToe);
        assert_eq!(options.agent, AgentKind::Minimax);
        assert_eq!(options.depth, 2);
        assert_eq!(options.evaluation, "score");
        assert_eq!(options.first, None);
    }

    #[test]
    fn test_short_flags_and_legacy_names() {
        let options = parse(&["-t", "ConnectFour", "-a", "AlphaBetaAgent", "-d", "3"]).unwrap();
        assert_eq!(options.game, GameKind::ConnectFour);
        assert_eq!(options.agent, AgentKind::AlphaBeta);
        assert_eq!(options.depth, 3);
        assert_eq!(options.game.rules(), KInARow::connect_four());
    }

    #[test]
    fn test_game_names_resolve_to_rules() {
        for name in ["tic-tac-toe", "TicTacToe"] {
            assert_eq!(parse(&["-t", name]).unwrap().game.rules(), KInARow::tic_tac_toe());
        }
        for name in ["connect-four", "ConnectFour"] {
            assert_eq!(parse(&["--type", name]).unwrap().game.rules(), KInARow::connect_four());
        }
    }

    #[test]
    fn test_long_flags() {
        let options = parse(&["--agent", "expectimax", "--first", "computer", "--seed", "9"]).unwrap();
        assert_eq!(options.agent, AgentKind::Expectimax);
        assert_eq!(options.first, Some(FirstMover::Computer));
        assert_eq!(options.seed, 9);
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let err = parse(&["leftover"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.to_string().contains("leftover"));

        let err = parse(&["--colour", "red"]).unwrap_err();
        assert!(err.to_string().contains("--colour"));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(parse(&["-t", "Chess"]).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(parse(&["-d", "two"]).unwrap_err().kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_settings() {
        let options = parse(&["-a", "alpha-beta", "-d", "4"]).unwrap();
        let settings = options.settings();
        assert_eq!(settings.strategy, StrategyKind::AlphaBeta);
        assert_eq!(settings.depth, 4);
    }

    #[test]
    fn test_build_agent() {
        for agent in ["minimax", "alpha-beta", "expectimax", "reflex"] {
            let options = parse(&["-a", agent]).unwrap();
            assert!(options.build_agent().is_ok(), "{agent}");
        }

        let options = parse(&["-e", "mystery"]).unwrap();
        assert_eq!(
            options.build_agent().err(),
            Some(ConfigError::UnknownEvaluator("mystery".to_string()))
        );
    }

    #[test]
    fn test_first_mover_prompt() {
        assert_eq!(FirstMover::from_prompt("1\n"), Ok(FirstMover::Human));
        assert_eq!(FirstMover::from_prompt(" 0 "), Ok(FirstMover::Computer));
        assert!(FirstMover::from_prompt("me").is_err());
        assert_eq!(FirstMover::Computer.computer_mark(), Mark::X);
        assert_eq!(FirstMover::Human.computer_mark(), Mark::O);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GameKind::ConnectFour.to_string(), "connect-four");
        assert_eq!(AgentKind::AlphaBeta.to_string(), "alpha-beta");
        assert_eq!(AgentKind::Reflex.to_string(), "reflex");
    }
}
