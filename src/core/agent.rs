//! Agent identification.
//!
//! ## AgentId
//!
//! Type-safe agent index supporting 1-256 agents. Agent 0 is always the
//! maximizing agent; every other index belongs to the adversary (or, under
//! expectimax, to chance).

use serde::{Deserialize, Serialize};

/// Index of the agent to move.
///
/// Agent indices are 0-based and cycle over `[0, num_agents)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The maximizing agent.
    pub const MAX: AgentId = AgentId(0);

    /// Largest agent count an `AgentId` can index.
    pub const LIMIT: usize = u8::MAX as usize + 1;

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this agent maximizes (agent 0) rather than minimizes.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        self.0 == 0
    }

    /// The agent that moves after this one in a game of `num_agents`.
    ///
    /// `num_agents` must lie in `1..=LIMIT`; search checks this before
    /// rotating.
    #[must_use]
    pub fn next(self, num_agents: usize) -> Self {
        debug_assert!(num_agents > 0, "Must have at least 1 agent");
        debug_assert!(num_agents <= Self::LIMIT, "{num_agents} agents exceed AgentId range");
        Self(((self.index() + 1) % num_agents) as u8)
    }

    /// Iterate over all agent IDs for a game with `num_agents` agents.
    ///
    /// ```
    /// use rust_gametree::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(3).collect();
    /// assert_eq!(agents, vec![AgentId(0), AgentId(1), AgentId(2)]);
    /// ```
    pub fn all(num_agents: usize) -> impl Iterator<Item = AgentId> {
        (0..num_agents.min(Self::LIMIT)).map(|i| AgentId(i as u8))
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_basics() {
        let a0 = AgentId::new(0);
        let a1 = AgentId::new(1);

        assert_eq!(a0.index(), 0);
        assert_eq!(a1.index(), 1);
        assert!(a0.is_maximizer());
        assert!(!a1.is_maximizer());
        assert_eq!(format!("{}", a1), "Agent 1");
    }

    #[test]
    fn test_agent_id_next_wraps() {
        assert_eq!(AgentId(0).next(3), AgentId(1));
        assert_eq!(AgentId(2).next(3), AgentId(0));
        assert_eq!(AgentId(0).next(1), AgentId(0));
    }

    #[test]
    fn test_full_range_rotation() {
        assert_eq!(AgentId(254).next(AgentId::LIMIT), AgentId(255));
        assert_eq!(AgentId(255).next(AgentId::LIMIT), AgentId(0));

        let all: Vec<_> = AgentId::all(AgentId::LIMIT).collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all.last(), Some(&AgentId(255)));
        assert_eq!(AgentId::all(1000).count(), 256);
    }

    #[test]
    fn test_agent_id_serialization() {
        let id = AgentId::new(4);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
