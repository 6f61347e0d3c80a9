//! Minimax with alpha-beta pruning.
//!
//! Returns the same root value as `minimax` for the same tree and action
//! order, visiting no more nodes. The window is passed by value into each
//! child, so siblings never observe each other's bounds.

use crate::core::{SearchError, Turn};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::node::{evaluate_leaf, expand, improves, initial_best};
use super::observer::{Bounds, Trace};
use super::strategy::{SearchOutcome, Strategy};

/// Alpha-beta strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaBeta;

impl<S: GameState> Strategy<S> for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(
        &self,
        state: &S,
        config: &SearchConfig<S>,
        trace: &mut Trace<'_>,
    ) -> Result<SearchOutcome<S::Action>, SearchError> {
        alphabeta(state, Turn::root(config.depth()), Bounds::FULL, config, trace)
    }
}

/// Alpha-beta value of `state` within `bounds`.
///
/// A maximizing node stops as soon as its best reaches `beta`; a minimizing
/// node stops as soon as its best drops to `alpha`.
pub fn alphabeta<S: GameState>(
    state: &S,
    turn: Turn,
    bounds: Bounds,
    config: &SearchConfig<S>,
    trace: &mut Trace<'_>,
) -> Result<SearchOutcome<S::Action>, SearchError> {
    debug_assert!(bounds.is_ordered(), "alpha {} > beta {}", bounds.alpha, bounds.beta);

    trace.frame(turn, Some(bounds), |trace| {
        let Some(expansion) = expand(state, turn)? else {
            return evaluate_leaf(state, config, trace);
        };

        let Bounds { mut alpha, mut beta } = bounds;
        let remaining = expansion.actions.len();
        let mut best = SearchOutcome::leaf(initial_best(turn.agent));

        for (i, action) in expansion.actions.into_iter().enumerate() {
            let child = state.successor(turn.agent, &action)?;
            let value = alphabeta(&child, expansion.next, Bounds::new(alpha, beta), config, trace)?.value;
            if improves(turn.agent, value, best.value) {
                best = SearchOutcome::new(value, action);
            }

            let cut = if turn.agent.is_maximizer() {
                best.value >= beta
            } else {
                best.value <= alpha
            };
            if cut {
                trace.cutoff(turn, Bounds::new(alpha, beta), remaining - i - 1);
                return Ok(best);
            }

            if turn.agent.is_maximizer() {
                alpha = alpha.max(best.value);
            } else {
                beta = beta.min(best.value);
            }
        }
        Ok(best)
    })
}
