//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Play against the alpha-beta search, or ask it about a board.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use strictly_tictactoe::{Board, Mark};
use strictly_tictactoe_cli::cli::{Cli, Command};
use strictly_tictactoe_cli::report::{self, SolveReport};
use strictly_tictactoe_cli::{HumanPlayer, MinimaxPlayer, Orchestrator, PlayConfig, Player};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { human } => {
            let config = match human {
                Some(mark) => config.with_human_mark(mark),
                None => config,
            };
            run_play(&config)
        }
        Command::Solve { board, json } => run_solve(&board, json),
        Command::SelfPlay { json } => run_self_play(json),
    }
}

/// Installs the tracing subscriber, logging to stderr.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}

/// Human against computer over stdin/stdout.
#[instrument(skip_all, fields(human = %config.human_mark()))]
fn run_play(config: &PlayConfig) -> Result<()> {
    let human_mark = *config.human_mark();
    let show_stats = *config.show_stats();
    info!("Starting interactive game");

    let human: Box<dyn Player> =
        Box::new(HumanPlayer::new("You", io::stdin().lock(), io::stdout()));
    let computer: Box<dyn Player> = Box::new(MinimaxPlayer::new("Computer"));
    let (player_x, player_o) = match human_mark {
        Mark::X => (human, computer),
        Mark::O => (computer, human),
    };

    let mut out = io::stdout();
    writeln!(out, "You play {}. Enter 1-9, row,col, or a square name.", human_mark)?;

    let mut game = Orchestrator::new(player_x, player_o);
    game.run(|event| Ok(report::write_event(event, show_stats, &mut out)?))?;

    Ok(())
}

/// Prints the best move for a board given in text notation.
#[instrument]
fn run_solve(board: &str, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let solved = SolveReport::new(&board);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &solved)?;
        writeln!(out)?;
    } else {
        solved.write_text(&board, &mut out)?;
    }
    Ok(())
}

/// Plays the search against itself from the empty board.
#[instrument]
fn run_self_play(json: bool) -> Result<()> {
    let mut game = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Computer X")),
        Box::new(MinimaxPlayer::new("Computer O")),
    );
    let record = game.run(|_| Ok(()))?;

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &record)?;
        writeln!(out)?;
    } else {
        report::write_record(&record, &mut out)?;
    }
    Ok(())
}
