//! Exhaustive minimax.
//!
//! Agent 0 maximizes. Every other agent minimizes, so with more than two
//! agents the opponents act as one pooled adversary, each taking its own
//! minimizing layer within the ply.

use crate::core::{SearchError, Turn};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::node::{evaluate_leaf, expand, improves, initial_best};
use super::observer::Trace;
use super::strategy::{SearchOutcome, Strategy};

/// Minimax strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimax;

impl<S: GameState> Strategy<S> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(
        &self,
        state: &S,
        config: &SearchConfig<S>,
        trace: &mut Trace<'_>,
    ) -> Result<SearchOutcome<S::Action>, SearchError> {
        minimax(state, Turn::root(config.depth()), config, trace)
    }
}

/// Minimax value of `state` with `turn.agent` to move.
///
/// Children are visited in the order `legal_actions` returns them and the
/// first strictly better child wins, so results are reproducible.
pub fn minimax<S: GameState>(
    state: &S,
    turn: Turn,
    config: &SearchConfig<S>,
    trace: &mut Trace<'_>,
) -> Result<SearchOutcome<S::Action>, SearchError> {
    trace.frame(turn, None, |trace| {
        let Some(expansion) = expand(state, turn)? else {
            return evaluate_leaf(state, config, trace);
        };

        let mut best = SearchOutcome::leaf(initial_best(turn.agent));
        for action in expansion.actions {
            let child = state.successor(turn.agent, &action)?;
            let value = minimax(&child, expansion.next, config, trace)?.value;
            if improves(turn.agent, value, best.value) {
                best = SearchOutcome::new(value, action);
            }
        }
        Ok(best)
    })
}
