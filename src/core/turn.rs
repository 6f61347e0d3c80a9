//! Turn scheduling: whose move it is and how many plies remain.
//!
//! One **ply** is a full round in which every agent from 0 to
//! `num_agents - 1` moves once. Depth decrements exactly once per ply, when
//! play wraps back around to agent 0, so a search explores a fixed horizon of
//! `depth` plies regardless of how many agents take part.

use serde::{Deserialize, Serialize};

use super::agent::AgentId;

/// Agent to move and remaining depth at a search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Agent to move.
    pub agent: AgentId,
    /// Plies left before the horizon.
    pub depth: u32,
}

impl Turn {
    /// The root turn of a search: agent 0 with the full depth limit.
    #[must_use]
    pub const fn root(depth: u32) -> Self {
        Self {
            agent: AgentId::MAX,
            depth,
        }
    }

    /// Create a turn for an arbitrary agent and depth.
    #[must_use]
    pub const fn new(agent: AgentId, depth: u32) -> Self {
        Self { agent, depth }
    }

    /// The turn that follows this one.
    ///
    /// ```
    /// use rust_gametree::core::{AgentId, Turn};
    ///
    /// let turn = Turn::root(2).next(2);
    /// assert_eq!(turn, Turn::new(AgentId(1), 2));
    /// assert_eq!(turn.next(2), Turn::new(AgentId(0), 1));
    /// ```
    #[must_use]
    pub fn next(self, num_agents: usize) -> Self {
        let agent = self.agent.next(num_agents);
        let depth = if agent == AgentId::MAX {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };
        Self { agent, depth }
    }

    /// Whether the horizon has been reached.
    #[must_use]
    pub const fn is_horizon(self) -> bool {
        self.depth == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_unchanged_mid_ply() {
        let turn = Turn::root(3).next(4);
        assert_eq!(turn.agent, AgentId(1));
        assert_eq!(turn.depth, 3);
    }

    #[test]
    fn test_full_rotation_decrements_once() {
        for num_agents in 1..=6 {
            let mut turn = Turn::root(5);
            for _ in 0..num_agents {
                turn = turn.next(num_agents);
            }
            assert_eq!(turn.agent, AgentId(0), "{num_agents} agents");
            assert_eq!(turn.depth, 4, "{num_agents} agents");
        }
    }

    #[test]
    fn test_widest_rotation_decrements_once() {
        let mut turn = Turn::root(5);
        let mut drops = Vec::new();
        for step in 1..=AgentId::LIMIT {
            let next = turn.next(AgentId::LIMIT);
            if next.depth < turn.depth {
                drops.push(step);
            }
            turn = next;
        }
        assert_eq!(drops, vec![AgentId::LIMIT]);
        assert_eq!(turn, Turn::root(4));
    }

    #[test]
    fn test_single_agent_decrements_every_move() {
        let turn = Turn::root(2).next(1);
        assert_eq!(turn, Turn::root(1));
        assert!(turn.next(1).is_horizon());
    }

    #[test]
    fn test_horizon_saturates() {
        let turn = Turn::new(AgentId(1), 0).next(2);
        assert_eq!(turn.depth, 0);
    }
}
