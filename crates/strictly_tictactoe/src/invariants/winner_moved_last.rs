//! Winner moved last invariant: the game stops when a line completes.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: a winner made the final ply.
///
/// If X has a line, X moved last and leads O by one mark. If O has a
/// line, the counts are equal.
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        match board.winner() {
            Some(Mark::X) => x == o + 1,
            Some(Mark::O) => x == o,
            None => true,
        }
    }

    fn description() -> &'static str {
        "The winning mark made the final move"
    }
}
