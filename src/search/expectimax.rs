//! Expectimax: agent 0 maximizes, every other agent is a chance node that
//! picks uniformly among its legal actions.

use crate::core::{SearchError, Turn};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::node::{evaluate_leaf, expand, improves, initial_best};
use super::observer::Trace;
use super::strategy::{SearchOutcome, Strategy};

/// Expectimax strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Expectimax;

impl<S: GameState> Strategy<S> for Expectimax {
    fn name(&self) -> &'static str {
        "expectimax"
    }

    fn search(
        &self,
        state: &S,
        config: &SearchConfig<S>,
        trace: &mut Trace<'_>,
    ) -> Result<SearchOutcome<S::Action>, SearchError> {
        expectimax(state, Turn::root(config.depth()), config, trace)
    }
}

/// Expectimax value of `state` with `turn.agent` to move.
///
/// Chance nodes report the mean of their children and no action.
pub fn expectimax<S: GameState>(
    state: &S,
    turn: Turn,
    config: &SearchConfig<S>,
    trace: &mut Trace<'_>,
) -> Result<SearchOutcome<S::Action>, SearchError> {
    trace.frame(turn, None, |trace| {
        let Some(expansion) = expand(state, turn)? else {
            return evaluate_leaf(state, config, trace);
        };

        if !turn.agent.is_maximizer() {
            trace.chance();
            let prob = 1.0 / expansion.actions.len() as f64;
            let mut expected = 0.0;
            for action in &expansion.actions {
                let child = state.successor(turn.agent, action)?;
                expected += prob * expectimax(&child, expansion.next, config, trace)?.value;
            }
            return Ok(SearchOutcome::leaf(expected));
        }

        let mut best = SearchOutcome::leaf(initial_best(turn.agent));
        for action in expansion.actions {
            let child = state.successor(turn.agent, &action)?;
            let value = expectimax(&child, expansion.next, config, trace)?.value;
            if improves(turn.agent, value, best.value) {
                best = SearchOutcome::new(value, action);
            }
        }
        Ok(best)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentId;
    use crate::games::explicit::{ExplicitTree, TreeSpec};
    use crate::search::SearchStats;

    fn run(state: &ExplicitTree, turn: Turn) -> (SearchOutcome<usize>, SearchStats) {
        let mut stats = SearchStats::new();
        let config = SearchConfig::default();
        let outcome = expectimax(state, turn, &config, &mut Trace::new(&mut stats, None)).unwrap();
        (outcome, stats)
    }

    #[test]
    fn test_chance_node_is_mean() {
        let state = ExplicitTree::new(&TreeSpec::leaves(&[5.0, 2.0, 9.0, 0.5]));
        let (outcome, stats) = run(&state, Turn::new(AgentId(1), 1));

        assert!((outcome.value - 4.125).abs() < 1e-9);
        assert_eq!(outcome.action, None);
        assert_eq!(stats.chance_nodes, 1);
    }

    #[test]
    fn test_figure_tree() {
        let state = ExplicitTree::new(&TreeSpec::branch(vec![
            TreeSpec::leaves(&[3.0, 12.0, 8.0]),
            TreeSpec::leaves(&[2.0, 4.0, 6.0]),
            TreeSpec::leaves(&[14.0, 5.0, 2.0]),
        ]));
        let (outcome, stats) = run(&state, Turn::root(1));

        // Means are 23/3, 4 and 7: the first branch wins.
        assert!((outcome.value - 23.0 / 3.0).abs() < 1e-9);
        assert_eq!(outcome.action, Some(0));
        assert_eq!(stats.chance_nodes, 3);
        assert_eq!(stats.nodes_visited, 13);
    }

    #[test]
    fn test_max_node_tie_break() {
        let state = ExplicitTree::new(&TreeSpec::leaves(&[3.0, 12.0, 8.0]));
        let (outcome, _) = run(&state, Turn::root(1));
        assert_eq!(outcome, SearchOutcome::new(12.0, 1));
    }

    #[test]
    fn test_chance_layers_compound() {
        // Three agents: agents 1 and 2 are both chance layers.
        let spec = TreeSpec::branch(vec![TreeSpec::branch(vec![
            TreeSpec::leaves(&[1.0, 3.0]),
            TreeSpec::leaves(&[10.0, 20.0]),
        ])]);
        let state = ExplicitTree::with_agents(&spec, 3);
        let (outcome, _) = run(&state, Turn::root(1));

        assert!((outcome.value - 8.5).abs() < 1e-9);
        assert_eq!(outcome.action, Some(0));
    }
}
