//! Text notation for boards.
//!
//! A board is written as nine symbols in row-major order: `X`, `O`, and
//! `.` (or `_`, `-`) for an empty cell. Whitespace, `/` and `|` are
//! ignored, so `"XO./.X./..O"` and `"X O _ | _ X _ | _ _ O"` both parse.

use crate::invariants::InvariantViolation;
use crate::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cell symbols.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A symbol that is not a mark or an empty-cell marker.
    #[display("Unknown square symbol {:?}", _0)]
    UnknownSymbol(char),

    /// The board cannot arise from legal play.
    #[display("Board is not reachable: {}", _0)]
    Unreachable(String),
}

impl std::error::Error for BoardParseError {}

impl From<Vec<InvariantViolation>> for BoardParseError {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        BoardParseError::Unreachable(descriptions)
    }
}

fn parse_cell(symbol: char) -> Result<Cell, BoardParseError> {
    match symbol {
        'X' | 'x' => Ok(Cell::Occupied(Mark::X)),
        'O' | 'o' => Ok(Cell::Occupied(Mark::O)),
        '.' | '_' | '-' => Ok(Cell::Empty),
        other => Err(BoardParseError::UnknownSymbol(other)),
    }
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Occupied(Mark::X) => 'X',
        Cell::Occupied(Mark::O) => 'O',
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses a board and checks it could arise from legal play.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(parse_cell)
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut rows = [[Cell::Empty; 3]; 3];
        for (i, cell) in cells.into_iter().enumerate() {
            rows[i / 3][i % 3] = cell;
        }

        let board = Board::from_rows(rows);
        board.validate()?;
        debug!(to_move = %board.player_to_move(), "Parsed board");
        Ok(board)
    }
}

impl Board {
    /// Writes the board in compact notation, rows separated by `/`.
    pub fn notation(&self) -> String {
        self.rows()
            .iter()
            .map(|row| row.iter().copied().map(cell_symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Human-readable grid: marks where played, square numbers `1`-`9` where
/// empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", r * 3 + c + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if c < 2 {
                    f.write_str("|")?;
                }
            }
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_parse_compact() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(2, 2), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.player_to_move(), Mark::X);
    }

    #[test]
    fn test_parse_spaced() {
        let board: Board = "x o _ | _ x _ | _ _ -".parse().unwrap();
        assert_eq!(board.notation(), "XO./.X./...");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardParseError::WrongLength(3))
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('?'))
        );
    }

    #[test]
    fn test_parse_rejects_unreachable() {
        let err = "OO./.../...".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardParseError::Unreachable(_)));
        assert!(err.to_string().contains("X holds as many marks as O"));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().apply(Move::new(1, 1)).unwrap();
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_notation_parses_back() {
        let board = Board::new()
            .apply(Move::new(0, 2))
            .and_then(|b| b.apply(Move::new(2, 1)))
            .unwrap();
        assert_eq!(board.notation().parse::<Board>(), Ok(board));
    }
}
