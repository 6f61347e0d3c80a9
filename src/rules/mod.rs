//! Game capability trait.
//!
//! Games implement `GameState` to expose:
//! - Legal actions for each agent
//! - Pure successor generation
//! - Win/loss predicates and an intrinsic score
//!
//! The search core calls into `GameState` but never interprets
//! game-specific concepts directly.

pub mod state;

pub use state::GameState;
