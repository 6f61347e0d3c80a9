//! k-in-a-row game state.

use std::fmt;

use crate::core::{AgentId, RulesError, Value};
use crate::rules::GameState;

use super::rules::{KInARow, Mark, Square};

const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A k-in-a-row position.
///
/// Marks live in a persistent map, so producing a successor copies only the
/// path to the new square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rules: KInARow,
    cells: im::HashMap<Square, Mark>,
    to_move: Mark,
    /// `+1` once X has k in a row, `-1` once O has, else 0.
    utility: i8,
    /// Mark played by agent 0.
    perspective: Mark,
}

impl Board {
    /// An empty board, X to move.
    #[must_use]
    pub fn new(rules: KInARow, perspective: Mark) -> Self {
        Self {
            rules,
            cells: im::HashMap::new(),
            to_move: Mark::X,
            utility: 0,
            perspective,
        }
    }

    /// Play `moves` in order from an empty board.
    pub fn replay(rules: KInARow, perspective: Mark, moves: &[Square]) -> Result<Self, RulesError> {
        moves
            .iter()
            .try_fold(Self::new(rules, perspective), |board, &square| board.play(square))
    }

    /// The same position scored from `perspective`'s point of view.
    #[must_use]
    pub fn from_perspective(&self, perspective: Mark) -> Self {
        Self {
            perspective,
            ..self.clone()
        }
    }

    /// Place the mark to move on `square`.
    pub fn play(&self, square: Square) -> Result<Self, RulesError> {
        if !self.is_open(square) {
            return Err(RulesError::illegal(self.agent_of(self.to_move), &square));
        }

        let mark = self.to_move;
        let mut next = self.clone();
        next.cells.insert(square, mark);
        next.to_move = mark.opponent();
        if next.completes_line(square, mark) {
            next.utility = mark.sign();
        }
        Ok(next)
    }

    /// Squares the mark to move may take, in row-major order.
    #[must_use]
    pub fn open_squares(&self) -> Vec<Square> {
        if self.utility != 0 {
            return Vec::new();
        }
        self.rules.squares().filter(|&sq| self.is_open(sq)).collect()
    }

    fn is_open(&self, square: Square) -> bool {
        if self.utility != 0 || !self.rules.contains(square) || self.cells.contains_key(&square) {
            return false;
        }
        !self.rules.gravity
            || square.row == self.rules.rows
            || self.cells.contains_key(&Square::new(square.row + 1, square.col))
    }

    fn completes_line(&self, square: Square, mark: Mark) -> bool {
        let run = |drow: i8, dcol: i8| {
            (1..)
                .map(|steps| square.offset(drow, dcol, steps))
                .take_while(|sq| sq.and_then(|sq| self.cells.get(&sq)) == Some(&mark))
                .count()
        };
        DIRECTIONS
            .iter()
            .any(|&(drow, dcol)| 1 + run(drow, dcol) + run(-drow, -dcol) >= self.rules.k as usize)
    }

    fn agent_of(&self, mark: Mark) -> AgentId {
        if mark == self.perspective {
            AgentId(0)
        } else {
            AgentId(1)
        }
    }

    /// The rules this board is played under.
    #[must_use]
    pub fn rules(&self) -> KInARow {
        self.rules
    }

    /// Mark to move next.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Mark played by agent 0.
    #[must_use]
    pub fn perspective(&self) -> Mark {
        self.perspective
    }

    /// Outcome from X's point of view: `+1`, `-1`, or 0 while undecided or drawn.
    #[must_use]
    pub fn utility(&self) -> i8 {
        self.utility
    }

    /// Mark on `square`, if any.
    #[must_use]
    pub fn mark_at(&self, square: Square) -> Option<Mark> {
        self.cells.get(&square).copied()
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.cells.len()
    }

    /// Someone has won or the board is full.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.utility != 0 || self.cells.len() == self.rules.square_count()
    }

    /// Winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self.utility {
            1 => Some(Mark::X),
            -1 => Some(Mark::O),
            _ => None,
        }
    }
}

impl GameState for Board {
    type Action = Square;

    fn legal_actions(&self, _agent: AgentId) -> Vec<Square> {
        self.open_squares()
    }

    fn successor(&self, agent: AgentId, action: &Square) -> Result<Self, RulesError> {
        if agent.index() >= self.num_agents() {
            return Err(RulesError::AgentOutOfRange {
                agent,
                num_agents: self.num_agents(),
            });
        }
        if !self.is_open(*action) {
            return Err(RulesError::illegal(agent, action));
        }
        self.play(*action)
    }

    fn is_win(&self) -> bool {
        self.score() > 0.0
    }

    fn is_lose(&self) -> bool {
        self.score() < 0.0
    }

    fn num_agents(&self) -> usize {
        2
    }

    fn score(&self) -> Value {
        (self.utility * self.perspective.sign()) as Value
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.rules.rows {
            let line: Vec<String> = (1..=self.rules.cols)
                .map(|col| {
                    self.mark_at(Square::new(row, col))
                        .map_or_else(|| ".".to_string(), |mark| mark.to_string())
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
