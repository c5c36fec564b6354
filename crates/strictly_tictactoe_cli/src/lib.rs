//! Terminal front end for strictly_tictactoe.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults
//! - **Players**: human (line input) and computer (alpha-beta search)
//! - **Orchestrator**: runs a game between two players, emitting events
//! - **Report**: text and JSON output for the solver commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod report;

pub use config::{ConfigError, PlayConfig};
pub use orchestrator::{GameEvent, GameRecord, Orchestrator, Ply};
pub use players::{HumanPlayer, MinimaxPlayer, Player};
pub use report::SolveReport;
