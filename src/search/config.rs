//! Search configuration.
//!
//! `SearchConfig` is the immutable record a strategy searches with: the depth
//! limit and the evaluation function. It is bound once per agent and passed
//! by reference into every recursive call.
//!
//! `SearchSettings` is the serializable, name-based form used by the driver
//! and by saved configurations. It resolves into a `SearchConfig`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, SearchError, Value};
use crate::rules::GameState;

use super::evaluation::{self, Evaluator, ScoreEvaluator};
use super::strategy::StrategyKind;

/// Immutable search configuration.
pub struct SearchConfig<S> {
    depth: u32,
    evaluator: Option<Arc<dyn Evaluator<S>>>,
}

impl<S> SearchConfig<S> {
    /// Create a config with a depth limit and an evaluator.
    pub fn new(depth: u32, evaluator: impl Evaluator<S> + 'static) -> Self {
        Self {
            depth,
            evaluator: Some(Arc::new(evaluator)),
        }
    }

    /// Create a config with no evaluation function.
    ///
    /// Searching with it fails with `SearchError::EvaluatorNotImplemented`.
    pub fn unevaluated(depth: u32) -> Self {
        Self {
            depth,
            evaluator: None,
        }
    }

    /// Create a new config with a custom depth limit.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a custom evaluator.
    pub fn with_evaluator(mut self, evaluator: impl Evaluator<S> + 'static) -> Self {
        self.evaluator = Some(Arc::new(evaluator));
        self
    }

    /// Create a new config with an already shared evaluator, or none.
    pub fn with_shared_evaluator(mut self, evaluator: Option<Arc<dyn Evaluator<S>>>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Depth limit in plies.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether an evaluation function is configured.
    #[must_use]
    pub fn has_evaluator(&self) -> bool {
        self.evaluator.is_some()
    }

    /// Evaluate a leaf state.
    pub fn evaluate(&self, state: &S) -> Result<Value, SearchError> {
        self.evaluator
            .as_ref()
            .map(|eval| eval.evaluate(state))
            .ok_or(SearchError::EvaluatorNotImplemented)
    }
}

impl<S: GameState> Default for SearchConfig<S> {
    fn default() -> Self {
        Self::new(2, ScoreEvaluator)
    }
}

impl<S> Clone for SearchConfig<S> {
    fn clone(&self) -> Self {
        Self {
            depth: self.depth,
            evaluator: self.evaluator.clone(),
        }
    }
}

impl<S> fmt::Debug for SearchConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("depth", &self.depth)
            .field("evaluator", &self.evaluator.is_some())
            .finish()
    }
}

/// Name-based search settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Which strategy to search with.
    pub strategy: StrategyKind,

    /// Depth limit in plies.
    pub depth: u32,

    /// Evaluation function name (see `evaluation::lookup`).
    pub evaluation: String,

    /// Seed for randomized tie-breaks.
    pub seed: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Minimax,
            depth: 2,
            evaluation: evaluation::SCORE.to_string(),
            seed: 42,
        }
    }
}

impl SearchSettings {
    /// Create new settings with a custom strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create new settings with a custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create new settings with a custom evaluation function name.
    pub fn with_evaluation(mut self, name: impl Into<String>) -> Self {
        self.evaluation = name.into();
        self
    }

    /// Create new settings with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Resolve into a search configuration for a game.
    pub fn config<S: GameState>(&self) -> Result<SearchConfig<S>, ConfigError> {
        let evaluator = evaluation::lookup::<S>(&self.evaluation)?;
        Ok(SearchConfig::unevaluated(self.depth).with_shared_evaluator(evaluator))
    }
}
