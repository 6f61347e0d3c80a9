//! # rust-gametree
//!
//! A game-agnostic adversarial search engine.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search depends only on the `GameState` trait.
//!    No board, piece, or move type is known to the core.
//!
//! 2. **N-Agent First**: Every search takes the agent count from the state.
//!    Agent 0 maximizes; a ply ends when every agent has moved once.
//!
//! 3. **Explicit Over Implicit**: Depth limit and evaluation function travel
//!    in an immutable `SearchConfig`, passed into every recursive call.
//!
//! ## Architecture
//!
//! - **Pure recursion**: No tree is kept between calls. Successor states are
//!   independent values and frames are discarded on return.
//!
//! - **Deterministic**: For a fixed action order, minimax, alpha-beta and
//!   expectimax always return the same result. Only the one-ply reflex
//!   selector draws random numbers, from a seeded stream.
//!
//! ## Modules
//!
//! - `core`: Agent IDs, turn scheduling, values, RNG, errors
//! - `rules`: The `GameState` capability trait
//! - `search`: Strategies, evaluation, configuration, instrumentation
//! - `games`: k-in-a-row board games and explicit game trees
//! - `driver`: Interactive command-line play (feature `cli`)

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

#[cfg(feature = "cli")]
pub mod driver;

// Re-export commonly used types
pub use crate::core::{AgentId, ConfigError, GameRng, RulesError, SearchError, Turn, Value};

pub use crate::rules::GameState;

pub use crate::search::{
    Agent, AlphaBeta, Evaluator, Expectimax, LogObserver, Minimax, ReflexAgent, ScoreEvaluator,
    SearchAgent, SearchConfig, SearchObserver, SearchOutcome, SearchSettings, SearchStats,
    Strategy, StrategyKind,
};
