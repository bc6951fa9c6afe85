//! Play games until one is won.

use std::time::Instant;

use log::info;

use crate::core::GameConfig;
use crate::error::Result;
use crate::players::PlayerFactory;

use super::{play_one, GameSource, RunReport, Runner, RunnerConfig};

/// Plays game after game, sequentially, until a win or `max_games`.
#[derive(Clone, Debug, Default)]
pub struct UntilWinRunner {
    config: RunnerConfig,
}

impl UntilWinRunner {
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }
}

impl Runner for UntilWinRunner {
    fn name(&self) -> &'static str {
        "untilwin"
    }

    fn run(&self, game: &GameConfig, players: &PlayerFactory) -> Result<RunReport> {
        let start = Instant::now();
        let mut source = GameSource::new(*game, self.config.seed);
        let mut report = RunReport::new(self.name());

        while !report.last_won() && !self.config.exhausted(report.games) {
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
        if report.last_won() {
            info!("Winning took {} games", report.games);
        }
        Ok(report)
    }
}
