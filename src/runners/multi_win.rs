//! Play games until a number of wins is collected.

use std::time::Instant;

use log::info;

use crate::core::GameConfig;
use crate::error::Result;
use crate::players::PlayerFactory;

use super::{play_one, GameSource, RunReport, Runner, RunnerConfig};

/// Keeps playing until `wins` games have been won, then reports averages
/// over the winning games.
#[derive(Clone, Debug)]
pub struct MultiWinRunner {
    wins: u64,
    config: RunnerConfig,
}

impl MultiWinRunner {
    #[must_use]
    pub fn new(wins: u64, config: RunnerConfig) -> Self {
        Self { wins, config }
    }

    #[must_use]
    pub fn wins(&self) -> u64 {
        self.wins
    }
}

impl Runner for MultiWinRunner {
    fn name(&self) -> &'static str {
        "multiwin"
    }

    fn run(&self, game: &GameConfig, players: &PlayerFactory) -> Result<RunReport> {
        let start = Instant::now();
        let mut source = GameSource::new(*game, self.config.seed);
        let mut report = RunReport::new(self.name());

        while (report.wins.len() as u64) < self.wins && !self.config.exhausted(report.games) {
            report.record(play_one(&mut source, players, self.config.max_moves)?);

            if self.config.progress_due(report.games) {
                info!(
                    "Played {} games in {:?} with an average {:.1} moves to failure",
                    report.games,
                    start.elapsed(),
                    report.avg_moves()
                );
            }
        }

        report.elapsed = start.elapsed();
        info!(
            "{} wins: average {:.2} games to win, {:.2} moves and {:.2} score per winning game",
            report.wins.len(),
            report.avg_games_to_win(),
            report.avg_winning_moves(),
            report.avg_winning_score()
        );
        Ok(report)
    }
}
