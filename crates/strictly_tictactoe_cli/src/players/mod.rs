//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use strictly_tictactoe::{Board, Evaluation, Move};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the board shown.
    fn get_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether the player may be asked again after an illegal move.
    ///
    /// Players that cannot make mistakes keep the default, which turns a
    /// rejected move into an error.
    fn may_retry(&self) -> bool {
        false
    }

    /// The search result behind the player's most recent move, if it searched.
    fn last_evaluation(&self) -> Option<Evaluation> {
        None
    }
}
