//! Play exactly one game.

use std::time::Instant;

use log::info;

use crate::core::GameConfig;
use crate::error::Result;
use crate::players::PlayerFactory;

use super::{play_one, GameSource, RunReport, Runner};

/// Runs a single game until it is won or lost.
#[derive(Clone, Debug, Default)]
pub struct SingleRunner {
    seed: Option<u64>,
    max_moves: Option<u64>,
}

impl SingleRunner {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed, max_moves: None }
    }

    /// Stop the game after `max_moves` choices, if set.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: Option<u64>) -> Self {
        self.max_moves = max_moves;
        self
    }
}

impl Runner for SingleRunner {
    fn name(&self) -> &'static str {
        "single"
    }

    fn run(&self, game: &GameConfig, players: &PlayerFactory) -> Result<RunReport> {
        let start = Instant::now();
        let mut source = GameSource::new(*game, self.seed);
        let mut report = RunReport::new(self.name());

        let summary = play_one(&mut source, players, self.max_moves)?;
        info!("game finished: {} with score {}", summary.status, summary.score);
        report.record(summary);

        report.elapsed = start.elapsed();
        Ok(report)
    }
}
