//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use serde::Serialize;
use strictly_tictactoe::{Board, Evaluation, Mark, Move, Outcome, initial_state};
use tracing::{debug, info, warn};

/// Events emitted while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board state updated.
    StateChanged(Board),
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell filled.
        position: Move,
        /// The mover's own search behind this move, for computer players.
        evaluation: Option<Evaluation>,
    },
    /// A move was refused by the board.
    MoveRejected {
        /// Name of the player whose move was refused.
        player: String,
        /// Why it was refused.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
}

/// One ply of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// Mark placed.
    pub mark: Mark,
    /// Cell filled.
    pub position: Move,
}

/// Record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Plies in order.
    pub plies: Vec<Ply>,
    /// Final board.
    pub board: Board,
    /// Final outcome.
    pub outcome: Outcome,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator starting from the empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: initial_state(),
            player_x,
            player_o,
        }
    }

    /// Runs the game loop until the board is terminal.
    ///
    /// Every event is passed to `on_event`; an error from it stops the game.
    /// A player that [may retry](Player::may_retry) is asked again after
    /// each rejected move for as long as it keeps answering.
    pub fn run(
        &mut self,
        mut on_event: impl FnMut(&GameEvent) -> Result<()>,
    ) -> Result<GameRecord> {
        info!("Starting game orchestration");
        let mut plies = Vec::new();
        on_event(&GameEvent::StateChanged(self.board))?;

        while !self.board.is_terminal() {
            let mark = self.board.player_to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            let (position, next) = loop {
                debug!(player = %name, "Waiting for move");
                let position = player.get_move(&self.board)?;
                match self.board.apply(position) {
                    Ok(next) => break (position, next),
                    Err(e) if player.may_retry() => {
                        warn!(player = %name, error = %e, "Move rejected");
                        on_event(&GameEvent::MoveRejected {
                            player: name.clone(),
                            reason: e.to_string(),
                        })?;
                    }
                    Err(e) => return Err(e.into()),
                }
            };
            let evaluation = player.last_evaluation();

            self.board = next;
            plies.push(Ply { mark, position });
            on_event(&GameEvent::MoveMade {
                player: name,
                mark,
                position,
                evaluation,
            })?;
            on_event(&GameEvent::StateChanged(self.board))?;
        }

        let outcome = self.board.outcome();
        let winner = outcome.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(%outcome, "Game over");
        on_event(&GameEvent::GameOver { outcome, winner })?;

        Ok(GameRecord {
            plies,
            board: self.board,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::MinimaxPlayer;
    use strictly_tictactoe::evaluate;

    /// Plays a fixed script of moves.
    struct Scripted {
        moves: std::vec::IntoIter<Move>,
        retry: bool,
    }

    impl Scripted {
        fn new(moves: Vec<Move>, retry: bool) -> Box<Self> {
            Box::new(Self {
                moves: moves.into_iter(),
                retry,
            })
        }
    }

    impl Player for Scripted {
        fn get_move(&mut self, _board: &Board) -> Result<Move> {
            self.moves
                .next()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }

        fn name(&self) -> &str {
            "Script"
        }

        fn may_retry(&self) -> bool {
            self.retry
        }
    }

    #[test]
    fn test_minimax_self_play_draws() {
        let mut game = Orchestrator::new(
            Box::new(MinimaxPlayer::new("AI X")),
            Box::new(MinimaxPlayer::new("AI O")),
        );
        let record = game.run(|_| Ok(())).unwrap();
        assert_eq!(record.outcome, Outcome::Draw);
        assert_eq!(record.plies.len(), 9);
        assert_eq!(record.plies[0].mark, Mark::X);
        assert_eq!(record.plies[1].mark, Mark::O);
    }

    #[test]
    fn test_retrying_player_gets_another_chance() {
        let script = vec![
            Move::new(1, 1),
            Move::new(1, 1),
            Move::new(0, 1),
            Move::new(2, 1),
        ];
        let mut game = Orchestrator::new(
            Scripted::new(vec![Move::new(0, 0), Move::new(0, 2), Move::new(1, 0)], false),
            Scripted::new(script, true),
        );
        let mut rejected = 0;
        let record = game
            .run(|e| {
                if matches!(e, GameEvent::MoveRejected { .. }) {
                    rejected += 1;
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(rejected, 1);
        // O recovers and completes the middle column.
        assert_eq!(record.outcome, Outcome::Won(Mark::O));
        assert_eq!(record.plies.len(), 6);
    }

    #[test]
    fn test_non_retrying_player_fails_on_illegal_move() {
        let mut game = Orchestrator::new(
            Scripted::new(vec![Move::new(1, 1), Move::new(1, 1)], false),
            Scripted::new(vec![Move::new(0, 0)], false),
        );
        let err = game.run(|_| Ok(())).unwrap_err();
        assert!(err.to_string().contains("already occupied"));
    }

    #[test]
    fn test_off_board_move_surfaces() {
        let mut game = Orchestrator::new(
            Scripted::new(vec![Move::new(5, 5)], false),
            Scripted::new(vec![], false),
        );
        let err = game.run(|_| Ok(())).unwrap_err();
        assert!(err.to_string().contains("off the board"));
    }

    #[test]
    fn test_retrying_player_is_never_cut_off() {
        // O asks for the occupied centre ten times before giving way.
        let mut script = vec![Move::new(1, 1); 11];
        script.extend([Move::new(0, 0), Move::new(0, 2), Move::new(1, 0)]);
        let mut game = Orchestrator::new(
            Scripted::new(
                vec![Move::new(1, 1), Move::new(2, 2), Move::new(2, 0), Move::new(2, 1)],
                false,
            ),
            Scripted::new(script, true),
        );
        let mut rejected = 0;
        let record = game
            .run(|e| {
                if matches!(e, GameEvent::MoveRejected { .. }) {
                    rejected += 1;
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(rejected, 11);
        // X completes the bottom row.
        assert_eq!(record.outcome, Outcome::Won(Mark::X));
        assert_eq!(record.plies.len(), 7);
    }

    #[test]
    fn test_move_events_carry_the_movers_search() {
        let mut game = Orchestrator::new(
            Box::new(MinimaxPlayer::new("AI X")),
            Scripted::new(vec![Move::new(1, 1)], false),
        );
        let mut evaluations = Vec::new();
        // The script runs dry on its second turn.
        let _ = game.run(|e| {
            if let GameEvent::MoveMade { evaluation, .. } = e {
                evaluations.push(*evaluation);
            }
            Ok(())
        });
        let after_centre = Board::new()
            .apply(Move::new(0, 0))
            .and_then(|b| b.apply(Move::new(1, 1)))
            .unwrap();
        assert_eq!(
            evaluations,
            vec![
                Some(evaluate(&Board::new())),
                None,
                Some(evaluate(&after_centre)),
            ]
        );
    }
}
