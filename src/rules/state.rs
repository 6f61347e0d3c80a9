//! Game state capability consumed by the search core.
//!
//! Games implement `GameState` on their state type. The search strategies
//! depend only on this trait, never on a concrete game.

use std::fmt::Debug;

use crate::core::{AgentId, RulesError, Value};

/// Game state trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return an empty vec if the agent can't act. The order
///   must be stable across repeated calls on the same state; the strategies
///   break ties by it.
/// - `successor`: Must not mutate `self`. Each returned state is an
///   independent value. Reject actions outside `legal_actions`.
/// - `is_win` / `is_lose`: Terminal predicates, never both true.
/// - `num_agents`: Constant for a given game, at least 1.
/// - `score`: The state's own score signal, used by the default evaluator.
pub trait GameState: Sized {
    /// Action token. Equality is used to validate and compare moves.
    type Action: Clone + PartialEq + Debug;

    /// Get legal actions for an agent, in a stable order.
    fn legal_actions(&self, agent: AgentId) -> Vec<Self::Action>;

    /// Produce the state after `agent` takes `action`.
    fn successor(&self, agent: AgentId, action: &Self::Action) -> Result<Self, RulesError>;

    /// The maximizing agent has won.
    fn is_win(&self) -> bool;

    /// The maximizing agent has lost.
    fn is_lose(&self) -> bool;

    /// Number of agents taking turns.
    fn num_agents(&self) -> usize;

    /// Intrinsic score of this state.
    fn score(&self) -> Value;

    // === Convenience Methods ===

    /// Whether a win or loss predicate holds.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Whether `action` is currently legal for `agent`.
    fn is_legal(&self, agent: AgentId, action: &Self::Action) -> bool {
        self.legal_actions(agent).contains(action)
    }
}
