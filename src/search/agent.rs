//! Agents: the objects a driver asks for a move once per turn.

use std::time::Instant;

use crate::core::SearchError;
use crate::rules::GameState;

use super::config::SearchConfig;
use super::observer::{SearchObserver, Trace};
use super::stats::SearchStats;
use super::strategy::{SearchOutcome, Strategy, StrategyKind};

/// Something that picks an action for agent 0 of a state.
pub trait Agent<S: GameState> {
    /// Choose an action. `None` when there is nothing to play.
    fn get_action(&mut self, state: &S) -> Result<Option<S::Action>, SearchError>;
}

/// Depth-limited search agent.
///
/// Pairs a strategy with its immutable configuration. Owns the statistics
/// of the most recent search and an optional observer.
pub struct SearchAgent<S: GameState> {
    /// The recursive strategy.
    strategy: Box<dyn Strategy<S>>,

    /// Depth limit and evaluation function.
    config: SearchConfig<S>,

    /// Instrumentation hook.
    observer: Option<Box<dyn SearchObserver>>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<S: GameState> SearchAgent<S> {
    /// Create an agent from a strategy and configuration.
    pub fn new(strategy: impl Strategy<S> + 'static, config: SearchConfig<S>) -> Self {
        Self::from_boxed(Box::new(strategy), config)
    }

    /// Create an agent for a strategy chosen by name.
    pub fn from_kind(kind: StrategyKind, config: SearchConfig<S>) -> Self {
        Self::from_boxed(kind.build(), config)
    }

    fn from_boxed(strategy: Box<dyn Strategy<S>>, config: SearchConfig<S>) -> Self {
        Self {
            strategy,
            config,
            observer: None,
            stats: SearchStats::default(),
        }
    }

    /// Attach an observer.
    pub fn with_observer<O: SearchObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Search `state` and return the root value and action.
    pub fn search(&mut self, state: &S) -> Result<SearchOutcome<S::Action>, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        let observer = self
            .observer
            .as_mut()
            .map(|o| o.as_mut() as &mut dyn SearchObserver);
        let mut trace = Trace::new(&mut self.stats, observer);

        let outcome = self.strategy.search(state, &self.config, &mut trace)?;
        trace.root(self.strategy.name(), outcome.value);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "{} depth {}: value {} action {:?} ({} nodes, {} cutoffs, {}us)",
            self.strategy.name(),
            self.config.depth(),
            outcome.value,
            outcome.action,
            self.stats.nodes_visited,
            self.stats.cutoffs,
            self.stats.time_us
        );

        Ok(outcome)
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig<S> {
        &self.config
    }

    /// Name of the strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl<S: GameState> Agent<S> for SearchAgent<S> {
    fn get_action(&mut self, state: &S) -> Result<Option<S::Action>, SearchError> {
        Ok(self.search(state)?.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::explicit::{ExplicitTree, TreeSpec};
    use crate::search::{Minimax, AlphaBeta};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Roots(Arc<Mutex<Vec<(String, f64)>>>);

    impl SearchObserver for Roots {
        fn on_root(&mut self, strategy: &str, value: f64) {
            self.0.lock().unwrap().push((strategy.to_string(), value));
        }
    }

    fn figure_tree() -> ExplicitTree {
        ExplicitTree::new(&TreeSpec::branch(vec![
            TreeSpec::leaves(&[3.0, 12.0, 8.0]),
            TreeSpec::leaves(&[2.0, 4.0, 6.0]),
            TreeSpec::leaves(&[14.0, 5.0, 2.0]),
        ]))
    }

    #[test]
    fn test_get_action() {
        let mut agent = SearchAgent::new(Minimax, SearchConfig::default());
        assert_eq!(agent.get_action(&figure_tree()), Ok(Some(0)));
        assert_eq!(agent.stats().nodes_visited, 13);
    }

    #[test]
    fn test_stats_reset_between_searches() {
        let mut agent = SearchAgent::new(AlphaBeta, SearchConfig::default());
        agent.search(&figure_tree()).unwrap();
        let first = agent.stats().nodes_visited;
        agent.search(&figure_tree()).unwrap();
        assert_eq!(agent.stats().nodes_visited, first);
    }

    #[test]
    fn test_observer_sees_root_value() {
        let roots = Roots::default();
        let mut agent = SearchAgent::from_kind(StrategyKind::Expectimax, SearchConfig::default())
            .with_observer(roots.clone());
        agent.search(&figure_tree()).unwrap();

        let seen = roots.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "expectimax");
        assert!((seen[0].1 - 23.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_evaluator_is_error() {
        let mut agent = SearchAgent::new(Minimax, SearchConfig::unevaluated(2));
        assert_eq!(
            agent.get_action(&figure_tree()),
            Err(SearchError::EvaluatorNotImplemented)
        );
    }

    #[test]
    fn test_terminal_root_has_no_action() {
        let mut agent = SearchAgent::new(Minimax, SearchConfig::default());
        let leaf = ExplicitTree::new(&TreeSpec::leaf(4.0));
        assert_eq!(agent.get_action(&leaf), Ok(None));
    }
}
