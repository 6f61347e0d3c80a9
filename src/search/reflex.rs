//! One-ply reflex selection.
//!
//! Scores each legal action by evaluating its immediate successor and plays
//! a best one. Unlike the recursive strategies, which keep the first of
//! several equal actions, ties here are broken uniformly at random.

use crate::core::{AgentId, GameRng, GameRngState, SearchError, Value};
use crate::rules::GameState;

use super::agent::Agent;
use super::config::SearchConfig;

/// One-ply action selector with randomized tie-breaks.
pub struct ReflexAgent<S> {
    /// Only the evaluator is used; the depth limit is ignored.
    config: SearchConfig<S>,
    rng: GameRng,
}

impl<S: GameState> ReflexAgent<S> {
    /// Create a reflex agent with a seeded tie-break stream.
    pub fn new(config: SearchConfig<S>, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
        }
    }

    /// Score every legal action of `agent` by its successor's evaluation.
    pub fn scores(&self, state: &S, agent: AgentId) -> Result<Vec<(S::Action, Value)>, SearchError> {
        state
            .legal_actions(agent)
            .into_iter()
            .map(|action| -> Result<_, SearchError> {
                let successor = state.successor(agent, &action)?;
                let score = self.config.evaluate(&successor)?;
                Ok((action, score))
            })
            .collect()
    }

    /// Choose a best-scoring action for `agent`, uniformly among ties.
    ///
    /// NaN scores never win. If every score is NaN, all legal actions are
    /// treated as tied.
    pub fn choose_action(&mut self, state: &S, agent: AgentId) -> Result<Option<S::Action>, SearchError> {
        let mut scored = self.scores(state, agent)?;
        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut tied: Vec<usize> = scored
            .iter()
            .enumerate()
            .filter(|(_, (_, score))| *score == best)
            .map(|(i, _)| i)
            .collect();
        if tied.is_empty() {
            tied = (0..scored.len()).collect();
        }

        Ok(self.rng.pick(&tied).map(|i| scored.swap_remove(i).0))
    }

    /// Capture the tie-break stream position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume the tie-break stream from a captured position.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }
}

impl<S: GameState> Agent<S> for ReflexAgent<S> {
    fn get_action(&mut self, state: &S) -> Result<Option<S::Action>, SearchError> {
        self.choose_action(state, AgentId::MAX)
    }
}
