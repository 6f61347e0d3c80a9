//! Depth-limited adversarial search for rust-gametree.
//!
//! ## Overview
//!
//! Three recursive strategies share one shape: descend through successor
//! states, rotating the agent to move with the turn scheduler, until the
//! depth horizon, a terminal state, or a state without legal actions; then
//! evaluate and unwind.
//!
//! - **Minimax**: agent 0 maximizes, all other agents minimize
//! - **Alpha-beta**: minimax with branch-and-bound cutoffs, same root value
//! - **Expectimax**: non-zero agents are uniform chance nodes
//!
//! A one-ply **reflex** selector shares the evaluation function abstraction
//! but does not recurse.
//!
//! ## Usage
//!
//! ```rust
//! use rust_gametree::games::explicit::{ExplicitTree, TreeSpec};
//! use rust_gametree::search::{Agent, SearchAgent, SearchConfig, StrategyKind};
//!
//! let state = ExplicitTree::new(&TreeSpec::branch(vec![
//!     TreeSpec::leaves(&[3.0, 12.0, 8.0]),
//!     TreeSpec::leaves(&[2.0, 4.0, 6.0]),
//!     TreeSpec::leaves(&[14.0, 5.0, 2.0]),
//! ]));
//!
//! let mut agent = SearchAgent::from_kind(StrategyKind::AlphaBeta, SearchConfig::default());
//! let outcome = agent.search(&state).unwrap();
//! assert_eq!(outcome.value, 3.0);
//! assert_eq!(agent.get_action(&state).unwrap(), Some(0));
//! ```

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod evaluation;
pub mod expectimax;
pub mod minimax;
mod node;
pub mod observer;
pub mod reflex;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use agent::{Agent, SearchAgent};
pub use alphabeta::{alphabeta, AlphaBeta};
pub use config::{SearchConfig, SearchSettings};
pub use evaluation::{Evaluator, ScoreEvaluator};
pub use expectimax::{expectimax, Expectimax};
pub use minimax::{minimax, Minimax};
pub use observer::{Bounds, LogObserver, NodeVisit, SearchObserver, Trace};
pub use reflex::ReflexAgent;
pub use stats::SearchStats;
pub use strategy::{SearchOutcome, Strategy, StrategyKind};
