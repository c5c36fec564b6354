//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Mark;

/// Strictly Tic-Tac-Toe - perfect play by exhaustive alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play {
        /// Mark you play (X moves first); overrides the config file
        #[arg(long)]
        human: Option<Mark>,
    },

    /// Print the best move for a board
    Solve {
        /// Board as nine symbols: X, O, and . for empty (e.g. "XO./.X./...")
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides from the empty board
    SelfPlay {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
