//! One interactive game between a human and a computer agent.

use std::fmt;
use std::io::{BufRead, Write};

use crate::games::k_in_a_row::{Board, KInARow, Mark, Square};
use crate::search::Agent;

use super::DriverError;

/// How a finished game went, from the human's side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    ComputerWon,
    HumanWon,
}

impl Outcome {
    /// Outcome of a finished `board` on which the computer plays `computer`.
    #[must_use]
    pub fn of(board: &Board, computer: Mark) -> Self {
        match board.winner() {
            None => Outcome::Draw,
            Some(mark) if mark == computer => Outcome::ComputerWon,
            Some(_) => Outcome::HumanWon,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Draw => f.write_str("It's a draw."),
            Outcome::ComputerWon => f.write_str("The computer wins."),
            Outcome::HumanWon => f.write_str("You win!"),
        }
    }
}

/// Alternates human and computer turns until the board is decided.
pub struct Session<R, W> {
    agent: Box<dyn Agent<Board>>,
    computer: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(agent: Box<dyn Agent<Board>>, computer: Mark, input: R, output: W) -> Self {
        Self {
            agent,
            computer,
            input,
            output,
        }
    }

    /// Play a game under `rules` from the empty board.
    ///
    /// The board is scored from the computer's side, so the computer is
    /// always agent 0 of the state it searches.
    pub fn play(&mut self, rules: KInARow) -> Result<(Board, Outcome), DriverError> {
        let mut board = rules.start(self.computer);

        while !board.is_game_over() {
            let square = if board.to_move() == self.computer {
                self.computer_move(&board)?
            } else {
                write!(self.output, "\n{board}")?;
                self.human_move(&board)?
            };
            board = board.play(square)?;
        }

        let outcome = Outcome::of(&board, self.computer);
        writeln!(self.output, "\n===========\nFinal board\n===========")?;
        write!(self.output, "{board}")?;
        writeln!(self.output, "{outcome}")?;
        log::info!("game over after {} moves: {:?}", board.moves_made(), outcome);
        Ok((board, outcome))
    }

    fn computer_move(&mut self, board: &Board) -> Result<Square, DriverError> {
        let square = self.agent.get_action(board)?.ok_or(DriverError::NoMove)?;
        log::info!("computer plays {} at {}", self.computer, square);
        writeln!(self.output, "Computer moves to {square}")?;
        Ok(square)
    }

    /// Read squares until a legal one arrives. A forced move is played
    /// without asking.
    pub(crate) fn human_move(&mut self, board: &Board) -> Result<Square, DriverError> {
        let open = board.open_squares();
        if let [only] = open.as_slice() {
            writeln!(self.output, "Your only move is {only}")?;
            return Ok(*only);
        }

        let mut line = String::new();
        loop {
            write!(self.output, "Your move. Enter coordinates (format: 2,1): ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DriverError::InputClosed);
            }

            match line.trim().parse::<Square>() {
                Ok(square) if open.contains(&square) => return Ok(square),
                Ok(square) => {
                    log::warn!("rejected move {square}: not open");
                    writeln!(self.output, "{square} is not a legal move.")?;
                }
                Err(e) => {
                    log::warn!("rejected input {:?}: {e}", line.trim());
                    writeln!(self.output, "Could not read that: {e}")?;
                }
            }
        }
    }
}
