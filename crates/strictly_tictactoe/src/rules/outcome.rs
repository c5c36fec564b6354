//! Terminal detection and scoring.

use super::draw::is_full;
use super::win::check_winner;
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Outcome of a board, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// Full board, no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the outcome of a board.
pub fn outcome(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(mark) => Outcome::Won(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Checks if the game is over: a winner exists or no empty cells remain.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Scores a board from X's point of view.
///
/// `1` when X has won, `-1` when O has won, `0` otherwise. A board with
/// no winner yet also scores `0`, so this is only meaningful at terminal
/// boards.
pub fn utility(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}
