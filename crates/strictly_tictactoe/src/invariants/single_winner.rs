//! Single winner invariant: at most one mark owns a complete line.

use super::Invariant;
use crate::rules::{LINES, line_owner};
use crate::{Board, Mark};

/// Invariant: X and O never both have a complete line.
///
/// The game stops at the first completed line, so a second winner can
/// never appear.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owners = LINES.iter().filter_map(|line| line_owner(board, *line));
        let (mut x, mut o) = (false, false);
        for mark in owners {
            match mark {
                Mark::X => x = true,
                Mark::O => o = true,
            }
        }
        !(x && o)
    }

    fn description() -> &'static str {
        "At most one mark has a complete line"
    }
}
