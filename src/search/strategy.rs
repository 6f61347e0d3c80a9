//! Strategy abstraction shared by minimax, alpha-beta and expectimax.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, SearchError, Value};
use crate::rules::GameState;

use super::alphabeta::AlphaBeta;
use super::config::SearchConfig;
use super::expectimax::Expectimax;
use super::minimax::Minimax;
use super::observer::Trace;

/// Value of a node and the action achieving it.
///
/// `action` is `None` at leaves, terminal states, states without legal
/// actions, and chance nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    pub value: Value,
    pub action: Option<A>,
}

impl<A> SearchOutcome<A> {
    /// An outcome with no action to report.
    #[must_use]
    pub fn leaf(value: Value) -> Self {
        Self { value, action: None }
    }

    #[must_use]
    pub fn new(value: Value, action: A) -> Self {
        Self {
            value,
            action: Some(action),
        }
    }
}

/// A depth-limited recursive search.
pub trait Strategy<S: GameState>: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Search from `state` with agent 0 to move and `config.depth()` plies.
    fn search(
        &self,
        state: &S,
        config: &SearchConfig<S>,
        trace: &mut Trace<'_>,
    ) -> Result<SearchOutcome<S::Action>, SearchError>;
}

/// The recursive strategies, by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl StrategyKind {
    /// All strategies, in declaration order.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::Expectimax,
    ];

    /// Build the strategy.
    #[must_use]
    pub fn build<S: GameState>(self) -> Box<dyn Strategy<S>> {
        match self {
            StrategyKind::Minimax => Box::new(Minimax),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta),
            StrategyKind::Expectimax => Box::new(Expectimax),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alpha-beta",
            StrategyKind::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" | "MinimaxAgent" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" | "AlphaBetaAgent" => Ok(StrategyKind::AlphaBeta),
            "expectimax" | "ExpectimaxAgent" => Ok(StrategyKind::Expectimax),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}
