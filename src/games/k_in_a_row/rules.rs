//! Grid geometry, marks, and squares.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::Board;

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// `+1` for X, `-1` for O.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// A square on the grid, 1-based. Row 1 is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The square `steps` away along `(drow, dcol)`, if it has positive coordinates.
    pub(crate) fn offset(self, drow: i8, dcol: i8, steps: i8) -> Option<Square> {
        let row = self.row as i16 + drow as i16 * steps as i16;
        let col = self.col as i16 + dcol as i16 * steps as i16;
        if row < 1 || col < 1 || row > u8::MAX as i16 || col > u8::MAX as i16 {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Why a `row,col` string did not parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("expected row,col but got {0:?}")]
    Format(String),
    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParseSquareError::Format(s.to_string()))?;
        let coord = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| ParseSquareError::Coordinate(part.trim().to_string()))
        };
        Ok(Square::new(coord(row)?, coord(col)?))
    }
}

/// Rules of a k-in-a-row game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KInARow {
    /// Number of rows.
    pub rows: u8,
    /// Number of columns.
    pub cols: u8,
    /// Marks in a line needed to win.
    pub k: u8,
    /// Marks drop to the lowest free square of their column.
    pub gravity: bool,
}

impl Default for KInARow {
    fn default() -> Self {
        Self::tic_tac_toe()
    }
}

impl KInARow {
    /// A board of `rows` × `cols` won by `k` in a row, without gravity.
    #[must_use]
    pub fn new(rows: u8, cols: u8, k: u8) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one square");
        assert!(k > 0, "k must be at least 1");
        Self {
            rows,
            cols,
            k,
            gravity: false,
        }
    }

    /// 3×3, three in a row.
    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3)
    }

    /// 6 rows × 7 columns, four in a row, with gravity.
    #[must_use]
    pub fn connect_four() -> Self {
        Self::new(6, 7, 4).with_gravity(true)
    }

    /// Create new rules with gravity switched on or off.
    #[must_use]
    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    /// Total number of squares.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether `square` lies on the board.
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        (1..=self.rows).contains(&square.row) && (1..=self.cols).contains(&square.col)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |row| (1..=cols).map(move |col| Square::new(row, col)))
    }

    /// An empty board, X to move, scored from `perspective`'s point of view.
    #[must_use]
    pub fn start(self, perspective: Mark) -> Board {
        Board::new(self, perspective)
    }
}
