//! Human player reading moves from a line-based input.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Move};
use tracing::debug;

/// Human player typing moves, one per line.
///
/// Accepts the square numbers shown on the board (`1`-`9`), `row,col`
/// pairs, or labels such as `center`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, _board: &Board) -> Result<Move> {
        loop {
            write!(self.prompt, "{}, your move: ", self.name)?;
            self.prompt.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match Move::parse(&line) {
                Some(mv) => {
                    debug!(player = %self.name, position = %mv, "Human chose position");
                    return Ok(mv);
                }
                None => writeln!(
                    self.prompt,
                    "Could not read {:?}; enter 1-9, row,col, or a square name",
                    line.trim()
                )?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn may_retry(&self) -> bool {
        true
    }
}
