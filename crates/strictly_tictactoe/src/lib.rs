//! Pure tic-tac-toe game logic with exhaustive alpha-beta search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Mark`], [`Move`]. Boards are
//!   `Copy` values; [`Board::apply`] returns a new board.
//! - **Rules**: win, draw and terminal detection plus scoring, as free
//!   functions over `&Board`.
//! - **Invariants**: structural checks every reachable board satisfies.
//! - **Search**: minimax with alpha-beta pruning, [`best_move`].
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Move, best_move, initial_state};
//!
//! let board = initial_state();
//! let mv = best_move(&board).expect("empty board has moves");
//! assert_eq!(mv, Move::new(0, 0));
//!
//! let board = board.apply(mv)?;
//! assert_eq!(board.occupied(), 1);
//! # Ok::<(), strictly_tictactoe::IllegalMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod notation;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{IllegalMoveError, Move};
pub use notation::BoardParseError;
pub use rules::Outcome;
pub use search::{Evaluation, best_move, evaluate, full_minimax};
pub use types::{Board, Cell, Mark, initial_state};
