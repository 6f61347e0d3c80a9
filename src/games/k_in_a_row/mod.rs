//! k-in-a-row board games.
//!
//! Two players alternate placing marks on a grid; the first to line up `k`
//! marks horizontally, vertically or diagonally wins. With gravity enabled a
//! mark must rest on the bottom row or on another mark.
//!
//! - **Tic-tac-toe**: 3×3, three in a row
//! - **Connect four**: 6 rows × 7 columns, four in a row, gravity
//!
//! X always moves first. Scores are reported from the point of view of the
//! board's *perspective* mark, the mark played by agent 0.

mod board;
mod rules;

pub use board::Board;
pub use rules::{KInARow, Mark, ParseSquareError, Square};
