//! Explicit tree game implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, RulesError, Value};
use crate::rules::GameState;

/// Terminal status of a tree node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Open,
    Win,
    Lose,
}

/// Declarative description of a game tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    /// Score of the node: the payoff of a leaf, or a heuristic for a branch.
    pub value: Value,
    /// Win/lose flag. Flagged nodes end search even if they have children.
    #[serde(default)]
    pub status: Status,
    /// Children in action order.
    #[serde(default)]
    pub children: Vec<TreeSpec>,
}

impl TreeSpec {
    /// A leaf with the given payoff.
    #[must_use]
    pub fn leaf(value: Value) -> Self {
        Self {
            value,
            status: Status::Open,
            children: Vec::new(),
        }
    }

    /// A branch with a heuristic value of 0.
    #[must_use]
    pub fn branch(children: Vec<TreeSpec>) -> Self {
        Self {
            value: 0.0,
            status: Status::Open,
            children,
        }
    }

    /// A branch whose children are all leaves.
    #[must_use]
    pub fn leaves(values: &[Value]) -> Self {
        Self::branch(values.iter().copied().map(Self::leaf).collect())
    }

    /// Set the heuristic value seen when search stops at this node.
    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Mark this node as a terminal state.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Total number of nodes, this one included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeSpec::node_count).sum::<usize>()
    }
}

#[derive(Clone, Debug)]
struct Node {
    value: Value,
    status: Status,
    children: Vec<usize>,
}

#[derive(Debug)]
struct Arena {
    nodes: Vec<Node>,
    num_agents: usize,
}

impl Arena {
    fn build(spec: &TreeSpec, num_agents: usize) -> Self {
        let mut arena = Self {
            nodes: Vec::with_capacity(spec.node_count()),
            num_agents,
        };
        arena.insert(spec);
        arena
    }

    fn insert(&mut self, spec: &TreeSpec) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value: spec.value,
            status: spec.status,
            children: Vec::with_capacity(spec.children.len()),
        });
        for child in &spec.children {
            let child_id = self.insert(child);
            self.nodes[id].children.push(child_id);
        }
        id
    }
}

/// A position in an explicit game tree.
///
/// Cloning is O(1): positions share the tree and only differ in the node
/// they point at.
#[derive(Clone, Debug)]
pub struct ExplicitTree {
    arena: Arc<Arena>,
    node: usize,
}

impl ExplicitTree {
    /// Build a two-agent game from a spec, positioned at the root.
    #[must_use]
    pub fn new(spec: &TreeSpec) -> Self {
        Self::with_agents(spec, 2)
    }

    /// Build a game with `num_agents` agents taking turns.
    #[must_use]
    pub fn with_agents(spec: &TreeSpec, num_agents: usize) -> Self {
        Self {
            arena: Arc::new(Arena::build(spec, num_agents)),
            node: 0,
        }
    }

    /// Arena index of the current node (the root is 0, then preorder).
    #[must_use]
    pub fn node(&self) -> usize {
        self.node
    }

    /// Number of children of the current node.
    #[must_use]
    pub fn branching(&self) -> usize {
        self.current().children.len()
    }

    fn current(&self) -> &Node {
        &self.arena.nodes[self.node]
    }
}

impl GameState for ExplicitTree {
    type Action = usize;

    fn legal_actions(&self, _agent: AgentId) -> Vec<usize> {
        (0..self.branching()).collect()
    }

    fn successor(&self, agent: AgentId, action: &usize) -> Result<Self, RulesError> {
        if agent.index() >= self.arena.num_agents {
            return Err(RulesError::AgentOutOfRange {
                agent,
                num_agents: self.arena.num_agents,
            });
        }
        let child = *self
            .current()
            .children
            .get(*action)
            .ok_or_else(|| RulesError::illegal(agent, action))?;

        Ok(Self {
            arena: Arc::clone(&self.arena),
            node: child,
        })
    }

    fn is_win(&self) -> bool {
        self.current().status == Status::Win
    }

    fn is_lose(&self) -> bool {
        self.current().status == Status::Lose
    }

    fn num_agents(&self) -> usize {
        self.arena.num_agents
    }

    fn score(&self) -> Value {
        self.current().value
    }
}
