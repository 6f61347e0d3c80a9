//! Explicit game trees.
//!
//! A game whose positions are the nodes of a literal tree: branches list
//! their children in order and leaves carry a value. Useful for checking
//! search behaviour against hand-computed answers, such as the classic
//! textbook tree of three minimizing nodes over `[3, 12, 8]`, `[2, 4, 6]`
//! and `[14, 5, 2]` whose minimax value is 3.
//!
//! Any number of agents is supported; the actions of every agent are the
//! child indices of the current node.

mod tree;

pub use tree::{ExplicitTree, Status, TreeSpec};
