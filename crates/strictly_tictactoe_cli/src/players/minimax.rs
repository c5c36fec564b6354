//! Computer player driven by the alpha-beta search.

use super::Player;
use anyhow::Result;
use strictly_tictactoe::{Board, Evaluation, Move, evaluate};
use tracing::{debug, instrument};

/// Computer player that always plays the search's optimal move.
pub struct MinimaxPlayer {
    name: String,
    last: Option<Evaluation>,
}

impl MinimaxPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last: None,
        }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<Move> {
        let eval = evaluate(board);
        self.last = Some(eval);

        match eval.best_move() {
            Some(mv) => {
                debug!(
                    position = %mv,
                    value = eval.value(),
                    nodes = eval.nodes(),
                    "AI chose position"
                );
                Ok(mv)
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_evaluation(&self) -> Option<Evaluation> {
        self.last
    }
}
