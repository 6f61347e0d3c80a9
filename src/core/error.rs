//! Error types for rules, search, and configuration.

use thiserror::Error;

use super::agent::AgentId;

/// A game refused a request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The action is not in the current legal set.
    #[error("illegal action {action} for {agent}")]
    IllegalAction { agent: AgentId, action: String },

    /// The agent index is not part of this game.
    #[error("{agent} out of range for a {num_agents}-agent game")]
    AgentOutOfRange { agent: AgentId, num_agents: usize },
}

impl RulesError {
    /// Build an `IllegalAction` from any debuggable action.
    pub fn illegal(agent: AgentId, action: &impl std::fmt::Debug) -> Self {
        RulesError::IllegalAction {
            agent,
            action: format!("{action:?}"),
        }
    }
}

/// A search call failed. No partial result is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No evaluation function was configured for this search.
    #[error("evaluation function not implemented")]
    EvaluatorNotImplemented,

    /// The game reported zero agents.
    #[error("game has no agents")]
    NoAgents,

    /// The game reported more agents than an `AgentId` can index.
    #[error("game has {0} agents, at most 256 are supported")]
    TooManyAgents(usize),

    /// The game rejected a successor request.
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// A named option could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown evaluation function: {0}")]
    UnknownEvaluator(String),


    #[error("first mover must be 0 (computer) or 1 (human), got {0:?}")]
    InvalidFirstMover(String),
}
