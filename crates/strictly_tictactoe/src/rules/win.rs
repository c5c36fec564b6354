//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Move};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns the mark owning `line`, if all three cells hold it.
pub fn line_owner(board: &Board, line: [Move; 3]) -> Option<Mark> {
    let [a, b, c] = line.map(|mv| board.cell(mv));
    match a {
        Some(Cell::Occupied(mark)) if a == b && a == c => Some(mark),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line found, scanning rows,
/// then columns, then diagonals.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(board, *line))
}
