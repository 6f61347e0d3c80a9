//! Concrete games implementing `GameState`.
//!
//! - `k_in_a_row`: tic-tac-toe, connect four, and other k-in-a-row boards
//! - `explicit`: literal game trees for checking search results

pub mod explicit;
pub mod k_in_a_row;
