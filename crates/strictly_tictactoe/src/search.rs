//! Exhaustive adversarial search.
//!
//! Minimax with alpha-beta pruning over the full game tree. There is no
//! evaluation heuristic: every line is played out to a terminal board and
//! scored with [`Board::utility`]. X maximizes, O minimizes.
//!
//! Moves are tried in row-major order and a move replaces the current
//! best only on a strict improvement, so among equally good moves the
//! first one in row-major order is chosen. On the empty board every move
//! draws and the search opens at `(0, 0)`.

use crate::{Board, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lower bound standing in for negative infinity.
const NEG_INFINITY: i32 = i32::MIN;

/// Upper bound standing in for positive infinity.
const POS_INFINITY: i32 = i32::MAX;

/// Result of searching a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game-theoretic value from X's point of view (`1`, `0` or `-1`).
    value: i32,
    /// Optimal move for the player to act; `None` on a terminal board.
    best_move: Option<Move>,
    /// Number of boards visited.
    nodes: u64,
}

impl Evaluation {
    /// Returns the game-theoretic value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the optimal move, if the game is not over.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Returns the number of boards visited.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Returns the optimal move for the player to act.
///
/// `None` means the board is terminal. Check [`Board::is_terminal`] first
/// to tell "game over" apart from "a move exists".
pub fn best_move(board: &Board) -> Option<Move> {
    evaluate(board).best_move
}

/// Searches `board` with alpha-beta pruning.
#[instrument(skip(board), fields(board = %board.notation(), to_move = %board.player_to_move()))]
pub fn evaluate(board: &Board) -> Evaluation {
    let mut nodes = 0;
    let (value, best_move) = alpha_beta(board, NEG_INFINITY, POS_INFINITY, &mut nodes);
    debug!(value, ?best_move, nodes, "Search complete");
    Evaluation {
        value,
        best_move,
        nodes,
    }
}

/// Searches `board` with plain minimax, no pruning.
///
/// Uses the same move order and tie-break as [`evaluate`], so both agree
/// on value and move for every board; only the node count differs.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn full_minimax(board: &Board) -> Evaluation {
    let mut nodes = 0;
    let (value, best_move) = minimax(board, &mut nodes);
    debug!(value, ?best_move, nodes, "Full minimax complete");
    Evaluation {
        value,
        best_move,
        nodes,
    }
}

/// Alpha-beta recursion.
///
/// `alpha` is the best value X is already guaranteed elsewhere, `beta`
/// the best O is guaranteed. A node stops enumerating once `beta <= alpha`.
fn alpha_beta(
    board: &Board,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if board.is_terminal() {
        return (board.utility(), None);
    }

    let to_move = board.player_to_move();
    let mut best_move = None;

    match to_move {
        Mark::X => {
            let mut best = NEG_INFINITY;
            for mv in board.legal_moves() {
                let child = board.place(mv, to_move);
                let (value, _) = alpha_beta(&child, alpha, beta, nodes);
                if value > best {
                    best = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        }
        Mark::O => {
            let mut best = POS_INFINITY;
            for mv in board.legal_moves() {
                let child = board.place(mv, to_move);
                let (value, _) = alpha_beta(&child, alpha, beta, nodes);
                if value < best {
                    best = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_move)
        }
    }
}

fn minimax(board: &Board, nodes: &mut u64) -> (i32, Option<Move>) {
    *nodes += 1;

    if board.is_terminal() {
        return (board.utility(), None);
    }

    let to_move = board.player_to_move();
    let mut best = match to_move {
        Mark::X => NEG_INFINITY,
        Mark::O => POS_INFINITY,
    };
    let mut best_move = None;

    for mv in board.legal_moves() {
        let (value, _) = minimax(&board.place(mv, to_move), nodes);
        let better = match to_move {
            Mark::X => value > best,
            Mark::O => value < best,
        };
        if better {
            best = value;
            best_move = Some(mv);
        }
    }

    (best, best_move)
}
