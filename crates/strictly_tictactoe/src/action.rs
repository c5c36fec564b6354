//! Moves and move errors for tic-tac-toe.
//!
//! A move names a cell by `(row, col)`. Moves carry no mark: the board
//! decides whose turn it is.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: the `(row, col)` of the cell to fill.
///
/// Construction is unchecked; [`Board::apply`](super::Board::apply)
/// rejects coordinates outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// Parses a move typed by a person.
    ///
    /// Accepts the square number shown on an empty board (`1`-`9`), a
    /// `row,col` pair, or a label (case-insensitive, e.g. `center`).
    #[instrument]
    pub fn parse(s: &str) -> Option<Move> {
        let s = s.trim();

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            return Some(Move::new(row, col));
        }

        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mv| mv.label().to_lowercase() == lower)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The target cell already holds a mark.
    #[display("Square {at} is already occupied by {by}")]
    Occupied {
        /// The move that was attempted.
        at: Move,
        /// The mark in the way.
        by: Mark,
    },

    /// The coordinates are outside the 3x3 grid.
    #[display("Move ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for IllegalMoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Move::from_index(8), Some(Move::new(2, 2)));
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_parse_number_is_one_based() {
        assert_eq!(Move::parse("1"), Some(Move::new(0, 0)));
        assert_eq!(Move::parse(" 5 "), Some(Move::new(1, 1)));
        assert_eq!(Move::parse("9"), Some(Move::new(2, 2)));
        assert_eq!(Move::parse("0"), None);
        assert_eq!(Move::parse("10"), None);
    }

    #[test]
    fn test_parse_pair_and_label() {
        assert_eq!(Move::parse("2, 0"), Some(Move::new(2, 0)));
        assert_eq!(Move::parse("center"), Some(Move::new(1, 1)));
        assert_eq!(Move::parse("Bottom-Right"), Some(Move::new(2, 2)));
        assert_eq!(Move::parse("middle"), None);
    }

    #[test]
    fn test_error_display() {
        let err = IllegalMoveError::Occupied {
            at: Move::new(1, 1),
            by: Mark::O,
        };
        assert_eq!(err.to_string(), "Square (1, 1) is already occupied by O");
    }
}
