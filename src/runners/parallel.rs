//! Play games on every core until one is won.
//!
//! Each worker thread owns its games and players outright. Finished games
//! come back as `GameSummary` values over a bounded queue. Once a win
//! arrives the runner drops its end of the stop channel; every worker sees
//! the disconnect and exits, and the thread scope joins them before the
//! report is returned.

use std::thread;
use std::time::Instant;

use crossbeam_channel::{bounded, select, Receiver, Sender};
use log::{debug, info};

use crate::core::GameConfig;
use crate::error::Result;
use crate::players::PlayerFactory;

use super::{play_one, GameSource, GameSummary, RunReport, Runner, RunnerConfig};

/// Runs independent games on `workers` threads until one is won.
#[derive(Clone, Debug)]
pub struct ParallelRunner {
    workers: usize,
    config: RunnerConfig,
}

impl ParallelRunner {
    /// `workers == 0` means one worker per available core.
    #[must_use]
    pub fn new(workers: usize, config: RunnerConfig) -> Self {
        Self { workers, config }
    }

    /// Worker count actually used.
    #[must_use]
    pub fn workers(&self) -> usize {
        if self.workers > 0 {
            self.workers
        } else {
            thread::available_parallelism().map_or(1, usize::from)
        }
    }
}

fn worker(
    id: usize,
    mut source: GameSource,
    players: &PlayerFactory,
    results: Sender<Result<GameSummary>>,
    stop: Receiver<()>,
    max_moves: Option<u64>,
) {
    loop {
        let outcome = play_one(&mut source, players, max_moves);

        // Either hand the result over or notice the stop channel closing.
        // A worker facing a full queue can still shut down.
        select! {
            send(results, outcome) -> sent => {
                if sent.is_err() {
                    return;
                }
            }
            recv(stop) -> _ => {
                debug!("worker {} stopping", id);
                return;
            }
        }
    }
}

impl Runner for ParallelRunner {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn run(&self, game: &GameConfig, players: &PlayerFactory) -> Result<RunReport> {
        let workers = self.workers();
        let start = Instant::now();
        let mut master = GameSource::new(*game, self.config.seed);
        let mut report = RunReport::new(self.name());

        let (result_tx, result_rx) = bounded(workers * 2);
        let (stop_tx, stop_rx) = bounded::<()>(0);

        info!("starting {} workers", workers);

        let outcome = thread::scope(|scope| {
            for id in 0..workers {
                let source = master.fork();
                let results = result_tx.clone();
                let stop = stop_rx.clone();
                let max_moves = self.config.max_moves;
                scope.spawn(move || worker(id, source, players, results, stop, max_moves));
            }
            drop(result_tx);

            let mut outcome = Ok(());
            while !report.last_won() && !self.config.exhausted(report.games) {
                match result_rx.recv() {
                    Ok(Ok(summary)) => report.record(summary),
                    Ok(Err(e)) => {
                        outcome = Err(e);
                        break;
                    }
                    Err(_) => break,
                }

                if self.config.progress_due(report.games) {
                    info!(
                        "Played {} games in {:?} with an average {:.1} moves to failure",
                        report.games,
                        start.elapsed(),
                        report.avg_moves()
                    );
                }
            }

            // Nothing is ever sent on the stop channel; closing it wakes
            // every live worker. Leaving the scope joins them all and
            // re-raises any worker panic.
            drop(stop_tx);
            outcome
        });
        outcome?;

        report.elapsed = start.elapsed();
        if report.last_won() {
            info!("Winning took {} games", report.games);
        }
        Ok(report)
    }
}
