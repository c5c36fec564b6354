//! Solver reports printed by the `solve` and `self-play` commands.

use crate::orchestrator::{GameEvent, GameRecord};
use serde::Serialize;
use std::io::Write;
use strictly_tictactoe::{Board, Mark, Move, Outcome, evaluate};
use tracing::instrument;

/// What the search says about one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Board in compact notation.
    pub board: String,
    /// Outcome as it stands.
    pub outcome: Outcome,
    /// Mark to act.
    pub to_move: Mark,
    /// Game-theoretic value from X's point of view.
    pub value: i32,
    /// Optimal move, if the game is not over.
    pub best_move: Option<Move>,
    /// Boards visited by the search.
    pub nodes: u64,
}

impl SolveReport {
    /// Runs the search on `board`.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn new(board: &Board) -> Self {
        let eval = evaluate(board);
        Self {
            board: board.notation(),
            outcome: board.outcome(),
            to_move: board.player_to_move(),
            value: eval.value(),
            best_move: eval.best_move(),
            nodes: eval.nodes(),
        }
    }

    /// Writes the report as plain text.
    pub fn write_text(&self, board: &Board, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", board)?;
        writeln!(out)?;
        match self.best_move {
            Some(mv) => {
                writeln!(out, "{} to move: play {} {}", self.to_move, mv.label(), mv)?;
                writeln!(out, "Value with perfect play: {}", describe_value(self.value))?;
            }
            None => writeln!(out, "Game over: {}", self.outcome)?,
        }
        writeln!(out, "Nodes searched: {}", self.nodes)
    }
}

/// Names a game-theoretic value.
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

/// Writes one event of an interactive game.
///
/// With `show_stats`, a computer move is followed by the value and node
/// count of the search that chose it.
pub fn write_event(
    event: &GameEvent,
    show_stats: bool,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match event {
        GameEvent::StateChanged(board) => writeln!(out, "\n{}\n", board),
        GameEvent::MoveMade {
            player,
            mark,
            position,
            evaluation,
        } => {
            writeln!(out, "{} ({}) plays {} {}", player, mark, position.label(), position)?;
            match evaluation {
                Some(eval) if show_stats => writeln!(
                    out,
                    "Value with perfect play: {} ({} nodes)",
                    describe_value(eval.value()),
                    eval.nodes()
                ),
                _ => Ok(()),
            }
        }
        GameEvent::MoveRejected { reason, .. } => writeln!(out, "{}", reason),
        GameEvent::GameOver { outcome, winner } => match winner {
            Some(name) => writeln!(out, "{} - {} wins!", outcome, name),
            None => writeln!(out, "{}", outcome),
        },
    }
}

/// Writes a finished game as plain text, one ply per line.
pub fn write_record(record: &GameRecord, out: &mut impl Write) -> std::io::Result<()> {
    for (i, ply) in record.plies.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} {} {}",
            i + 1,
            ply.mark,
            ply.position.label(),
            ply.position
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", record.board)?;
    writeln!(out)?;
    writeln!(out, "Result: {}", record.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_mate_in_one() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let report = SolveReport::new(&board);
        assert_eq!(report.best_move, Some(Move::new(0, 2)));
        assert_eq!(report.value, 1);
        assert_eq!(report.to_move, Mark::X);

        let mut out = Vec::new();
        report.write_text(&board, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("X to move: play Top-right (0, 2)"));
        assert!(text.contains("Value with perfect play: X wins"));
    }

    #[test]
    fn test_report_for_finished_game() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let report = SolveReport::new(&board);
        assert_eq!(report.best_move, None);

        let mut out = Vec::new();
        report.write_text(&board, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game over: Player X wins"));
    }

    #[test]
    fn test_stats_follow_computer_moves_only() {
        let eval = evaluate(&Board::new());
        let computer = GameEvent::MoveMade {
            player: "Computer".into(),
            mark: Mark::X,
            position: Move::new(0, 0),
            evaluation: Some(eval),
        };
        let human = GameEvent::MoveMade {
            player: "You".into(),
            mark: Mark::O,
            position: Move::new(1, 1),
            evaluation: None,
        };

        let mut out = Vec::new();
        write_event(&computer, true, &mut out).unwrap();
        write_event(&human, true, &mut out).unwrap();
        write_event(&computer, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let stats = format!("Value with perfect play: draw ({} nodes)", eval.nodes());
        assert_eq!(text.matches(&stats).count(), 1);
        assert!(text.contains("You (O) plays Center (1, 1)"));
    }

    #[test]
    fn test_report_json_shape() {
        let board: Board = ".........".parse().unwrap();
        let json = serde_json::to_value(SolveReport::new(&board)).unwrap();
        assert_eq!(json["board"], ".../.../...");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["value"], 0);
    }
}
