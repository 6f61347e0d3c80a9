//! Node bookkeeping shared by the recursive strategies.

use crate::core::{AgentId, SearchError, Turn, Value};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::observer::Trace;
use super::strategy::SearchOutcome;

/// Actions to explore at a node, and the turn their successors take.
pub(crate) struct Expansion<A> {
    pub actions: Vec<A>,
    pub next: Turn,
}

/// Decide whether a node recurses.
///
/// Returns `None` at the depth horizon, at terminal states, and when the
/// agent to move has no legal actions; those nodes are evaluated as leaves.
pub(crate) fn expand<S: GameState>(
    state: &S,
    turn: Turn,
) -> Result<Option<Expansion<S::Action>>, SearchError> {
    if turn.is_horizon() || state.is_terminal() {
        return Ok(None);
    }

    let actions = state.legal_actions(turn.agent);
    if actions.is_empty() {
        return Ok(None);
    }

    let num_agents = state.num_agents();
    if num_agents == 0 {
        return Err(SearchError::NoAgents);
    }
    if num_agents > AgentId::LIMIT {
        return Err(SearchError::TooManyAgents(num_agents));
    }

    Ok(Some(Expansion {
        actions,
        next: turn.next(num_agents),
    }))
}

/// Evaluate a leaf. Leaves report no action.
pub(crate) fn evaluate_leaf<S: GameState>(
    state: &S,
    config: &SearchConfig<S>,
    trace: &mut Trace<'_>,
) -> Result<SearchOutcome<S::Action>, SearchError> {
    trace.leaf();
    Ok(SearchOutcome::leaf(config.evaluate(state)?))
}

/// Running best before any child has been seen.
pub(crate) fn initial_best(agent: AgentId) -> Value {
    if agent.is_maximizer() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Strict improvement for the agent to move. Ties keep the earlier action.
pub(crate) fn improves(agent: AgentId, candidate: Value, best: Value) -> bool {
    if agent.is_maximizer() {
        candidate > best
    } else {
        candidate < best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::explicit::{ExplicitTree, Status, TreeSpec};

    #[test]
    fn test_improves_is_strict() {
        assert!(improves(AgentId(0), 2.0, 1.0));
        assert!(!improves(AgentId(0), 1.0, 1.0));
        assert!(improves(AgentId(2), 0.5, 1.0));
        assert!(!improves(AgentId(1), 1.0, 1.0));
    }

    #[test]
    fn test_expand_stops_at_horizon_and_terminal() {
        let open = ExplicitTree::new(&TreeSpec::leaves(&[1.0, 2.0]));
        assert!(expand(&open, Turn::root(0)).unwrap().is_none());

        let won = ExplicitTree::new(&TreeSpec::leaves(&[1.0]).with_status(Status::Win));
        assert!(expand(&won, Turn::root(3)).unwrap().is_none());

        let leaf = ExplicitTree::new(&TreeSpec::leaf(1.0));
        assert!(expand(&leaf, Turn::root(3)).unwrap().is_none());
    }

    #[test]
    fn test_expand_children() {
        let open = ExplicitTree::with_agents(&TreeSpec::leaves(&[1.0, 2.0]), 3);
        let expansion = expand(&open, Turn::root(1)).unwrap().unwrap();
        assert_eq!(expansion.actions, vec![0, 1]);
        assert_eq!(expansion.next, Turn::new(AgentId(1), 1));
    }

    #[test]
    fn test_expand_rejects_zero_agents() {
        let open = ExplicitTree::with_agents(&TreeSpec::leaves(&[1.0]), 0);
        assert_eq!(expand(&open, Turn::root(1)).err(), Some(SearchError::NoAgents));
    }

    #[test]
    fn test_expand_rejects_agents_beyond_id_range() {
        let crowded = ExplicitTree::with_agents(&TreeSpec::leaves(&[1.0]), 300);
        assert_eq!(
            expand(&crowded, Turn::root(1)).err(),
            Some(SearchError::TooManyAgents(300))
        );

        let full = ExplicitTree::with_agents(&TreeSpec::leaves(&[1.0]), AgentId::LIMIT);
        let expansion = expand(&full, Turn::new(AgentId(255), 1)).unwrap().unwrap();
        assert_eq!(expansion.next, Turn::new(AgentId(0), 0));
    }
}
