//! Search statistics for diagnostics and comparison between strategies.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root and leaves included.
    pub nodes_visited: u64,

    /// Leaf evaluations performed.
    pub leaves_evaluated: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Sibling actions skipped by cutoffs.
    pub pruned_actions: u64,

    /// Chance nodes averaged (expectimax).
    pub chance_nodes: u64,

    /// Deepest recursion reached, in frames (the root is frame 1).
    pub max_frames: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visited nodes that were leaves.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.leaves_evaluated as f64 / self.nodes_visited as f64
        }
    }
}
