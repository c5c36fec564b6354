//! Balanced marks invariant: X leads O by zero or one mark.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: players alternate starting with X.
///
/// After any sequence of legal plies, X holds as many marks as O or
/// exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X holds as many marks as O or exactly one more"
    }
}
