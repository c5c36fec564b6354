//! Core domain types for tic-tac-toe.

use super::action::{IllegalMoveError, Move};
use super::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use super::rules::{self, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition returns a new board and
/// leaves its parent untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Builds a board from rows of cells.
    ///
    /// The rows are taken as given. Use [`Board::validate`] when they come
    /// from outside the `apply` path.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the cell a move points at, or `None` off the board.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.get(mv.row(), mv.col())
    }

    /// Checks if the cell a move points at is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.cell(mv), Some(Cell::Empty))
    }

    /// Returns all cells as rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Counts the non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Returns the mark whose turn it is.
    ///
    /// X moves on an even number of placed marks, O on an odd number.
    pub fn player_to_move(&self) -> Mark {
        if self.occupied() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns every empty cell as a move, in row-major order.
    ///
    /// The order is part of the contract: the search breaks ties by
    /// taking the first optimal move it sees.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_empty(*mv))
            .collect()
    }

    /// Plays `mv` for the player to move and returns the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::OutOfBounds`] for coordinates outside
    /// `0..3` and [`IllegalMoveError::Occupied`] for a taken cell.
    #[instrument(skip(self), fields(to_move = %self.player_to_move()))]
    pub fn apply(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        match self.cell(mv) {
            None => Err(IllegalMoveError::OutOfBounds {
                row: mv.row(),
                col: mv.col(),
            }),
            Some(Cell::Occupied(by)) => Err(IllegalMoveError::Occupied { at: mv, by }),
            Some(Cell::Empty) => Ok(self.place(mv, self.player_to_move())),
        }
    }

    /// Places `mark` at `mv` without validation.
    ///
    /// Callers guarantee `mv` came from [`Board::legal_moves`].
    pub(crate) fn place(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[mv.row()][mv.col()] = Cell::Occupied(mark);
        next
    }

    /// Returns the winning mark, if any line is complete.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game is over (a winner or a full board).
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Score from X's point of view: `1` X won, `-1` O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards; an unfinished board scores `0`.
    pub fn utility(&self) -> i32 {
        rules::utility(self)
    }

    /// Derives the game outcome.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Checks the structural invariants of a board.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the starting board.
pub fn initial_state() -> Board {
    Board::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = initial_state();
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.player_to_move(), Mark::X);
    }

    #[test]
    fn test_player_to_move_alternates() {
        let mut board = Board::new();
        let mut expected = Mark::X;
        for mv in [Move::new(1, 1), Move::new(0, 0), Move::new(2, 2), Move::new(0, 2)] {
            assert_eq!(board.player_to_move(), expected);
            board = board.apply(mv).unwrap();
            assert_eq!(board.cell(mv), Some(Cell::Occupied(expected)));
            expected = expected.opponent();
            assert_eq!(board.player_to_move(), expected);
        }
    }

    #[test]
    fn test_apply_leaves_parent_untouched() {
        let parent = Board::new();
        let child = parent.apply(Move::new(1, 1)).unwrap();
        assert_eq!(parent, Board::new());
        assert_ne!(parent, child);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board = Board::new().apply(Move::new(0, 0)).unwrap();
        assert_eq!(
            board.apply(Move::new(0, 0)),
            Err(IllegalMoveError::Occupied {
                at: Move::new(0, 0),
                by: Mark::X,
            })
        );
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.apply(Move::new(3, 0)),
            Err(IllegalMoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.apply(Move::new(0, 7)),
            Err(IllegalMoveError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::new()
            .apply(Move::new(0, 1))
            .and_then(|b| b.apply(Move::new(1, 1)))
            .unwrap();
        assert_eq!(
            board.legal_moves(),
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_mark_parses_case_insensitive() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
        assert_eq!(Mark::O.to_string(), "O");
    }
}
