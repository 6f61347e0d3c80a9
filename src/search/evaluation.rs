//! Leaf evaluation functions.
//!
//! An `Evaluator` maps a state to a scalar value when search stops at the
//! depth horizon, at a terminal state, or at a state with no legal actions.
//! Evaluators must be total over reachable states and free of side effects.

use std::sync::Arc;

use crate::core::{ConfigError, Value};
use crate::rules::GameState;

/// Heuristic mapping a state to a value.
pub trait Evaluator<S>: Send + Sync {
    /// Evaluate a state from the maximizing agent's point of view.
    fn evaluate(&self, state: &S) -> Value;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> Value + Send + Sync,
{
    fn evaluate(&self, state: &S) -> Value {
        self(state)
    }
}

/// Default evaluator: the state's own score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> Value {
        state.score()
    }
}

/// Name of the default evaluator.
pub const SCORE: &str = "score";

/// Name reserved for a richer heuristic that has not been written yet.
///
/// Resolving it yields no evaluator, so searches configured with it fail
/// with `SearchError::EvaluatorNotImplemented` instead of silently scoring.
pub const BETTER: &str = "better";

/// Resolve an evaluator by name.
///
/// Returns `Ok(None)` for names that are declared but unimplemented.
pub fn lookup<S: GameState>(name: &str) -> Result<Option<Arc<dyn Evaluator<S>>>, ConfigError> {
    match name {
        SCORE | "scoreEvaluationFunction" => Ok(Some(Arc::new(ScoreEvaluator))),
        BETTER | "betterEvaluationFunction" => Ok(None),
        other => Err(ConfigError::UnknownEvaluator(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::explicit::{ExplicitTree, TreeSpec};

    #[test]
    fn test_score_evaluator() {
        let state = ExplicitTree::new(&TreeSpec::leaf(6.5));
        assert_eq!(ScoreEvaluator.evaluate(&state), 6.5);
    }

    #[test]
    fn test_closure_evaluator() {
        let double = |s: &ExplicitTree| s.score() * 2.0;
        let state = ExplicitTree::new(&TreeSpec::leaf(3.0));
        assert_eq!(double.evaluate(&state), 6.0);
    }

    #[test]
    fn test_lookup_score() {
        let eval = lookup::<ExplicitTree>(SCORE).unwrap().unwrap();
        let state = ExplicitTree::new(&TreeSpec::leaf(-2.0));
        assert_eq!(eval.evaluate(&state), -2.0);
    }

    #[test]
    fn test_lookup_unimplemented() {
        assert!(lookup::<ExplicitTree>(BETTER).unwrap().is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup::<ExplicitTree>("clever").err().unwrap();
        assert_eq!(err, ConfigError::UnknownEvaluator("clever".to_string()));
    }
}
