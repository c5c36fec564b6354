//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage; the `Board` methods of the
//! same names delegate here.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, is_terminal, outcome, utility};
pub use win::{LINES, check_winner, line_owner};
