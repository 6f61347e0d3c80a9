//! Core types: agents, turns, values, RNG, errors.
//!
//! This module contains the game-agnostic building blocks shared by the
//! search strategies and the games that feed them.

pub mod agent;
pub mod error;
pub mod rng;
pub mod turn;

pub use agent::AgentId;
pub use error::{ConfigError, RulesError, SearchError};
pub use rng::{GameRng, GameRngState};
pub use turn::Turn;

/// Search value: an extended real where `±∞` serve as bound sentinels.
pub type Value = f64;
