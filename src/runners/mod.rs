//! Runners: play many games and collect aggregate statistics.
//!
//! A runner builds a fresh `Game` and a fresh player for every game, drives
//! the game to completion, and folds the result into a `RunReport`. Runners
//! hold no board logic of their own.
//!
//! - `SingleRunner`: one game
//! - `UntilWinRunner`: games until one is won
//! - `MultiWinRunner`: games until N are won
//! - `ParallelRunner`: worker threads playing until one game is won

pub mod multi_win;
pub mod parallel;
pub mod report;
pub mod single;
pub mod until_win;

pub use multi_win::MultiWinRunner;
pub use parallel::ParallelRunner;
pub use report::{GameSummary, RunReport, WinRecord};
pub use single::SingleRunner;
pub use until_win::UntilWinRunner;

use log::debug;

use crate::core::{GameConfig, GameRng};
use crate::error::{Error, Result};
use crate::game::Game;
use crate::players::PlayerFactory;

/// Something that runs games however it sees fit.
pub trait Runner {
    /// Short name, as used on the command line.
    fn name(&self) -> &'static str;

    /// Play games built from `game` with players from `players`.
    fn run(&self, game: &GameConfig, players: &PlayerFactory) -> Result<RunReport>;
}

/// Settings shared by the repeated runners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Stop after this many games even without a win.
    pub max_games: Option<u64>,

    /// Log a progress line every this many games (0 disables).
    pub progress_every: u64,

    /// Master seed for game RNGs. `None` seeds every game from OS entropy.
    pub seed: Option<u64>,

    /// Give up on a single game after this many player choices.
    pub max_moves: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_games: None,
            progress_every: 1000,
            seed: None,
            max_moves: None,
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_games(mut self, max: u64) -> Self {
        self.max_games = Some(max);
        self
    }

    #[must_use]
    pub fn with_progress_every(mut self, every: u64) -> Self {
        self.progress_every = every;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_moves(mut self, max: u64) -> Self {
        self.max_moves = Some(max);
        self
    }

    /// Whether `games` has reached the configured cap.
    #[must_use]
    pub fn exhausted(&self, games: u64) -> bool {
        self.max_games.is_some_and(|max| games >= max)
    }

    /// Whether a progress line is due after `games` games.
    #[must_use]
    pub fn progress_due(&self, games: u64) -> bool {
        self.progress_every > 0 && games % self.progress_every == 0
    }
}

/// Produces fresh games, each with its own RNG.
///
/// With a master seed, game RNGs are forked from it so a run is
/// reproducible for deterministic players.
#[derive(Clone, Debug)]
pub struct GameSource {
    config: GameConfig,
    rng: Option<GameRng>,
}

impl GameSource {
    #[must_use]
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            rng: seed.map(GameRng::new),
        }
    }

    /// Build the next game.
    pub fn next_game(&mut self) -> Game {
        match &mut self.rng {
            Some(rng) => Game::with_rng(self.config, rng.fork()),
            None => Game::new(self.config),
        }
    }

    /// An independent source, e.g. for a worker thread.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config,
            rng: self.rng.as_mut().map(GameRng::fork),
        }
    }
}

/// Build one game and one player, and play it out, or until `max_moves`
/// choices have been made.
pub(crate) fn play_one(
    source: &mut GameSource,
    players: &PlayerFactory,
    max_moves: Option<u64>,
) -> Result<GameSummary> {
    let mut player = players();
    let mut game = source.next_game();
    match max_moves {
        Some(turns) => {
            player.play_at_most(&mut game, turns)?;
            if game.status().is_playing() {
                debug!("game abandoned after {} choices", turns);
            }
        }
        None => player.play(&mut game)?,
    }
    Ok(GameSummary::from(&game))
}

/// Runner strategies selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunnerKind {
    Single,
    UntilWin,
    MultiWin,
    Parallel,
}

impl RunnerKind {
    /// Construct the runner. `wins` only applies to `MultiWin`, `workers`
    /// only to `Parallel`.
    #[must_use]
    pub fn build(self, config: RunnerConfig, wins: u64, workers: usize) -> Box<dyn Runner> {
        match self {
            RunnerKind::Single => Box::new(SingleRunner::new(config.seed).with_max_moves(config.max_moves)),
            RunnerKind::UntilWin => Box::new(UntilWinRunner::new(config)),
            RunnerKind::MultiWin => Box::new(MultiWinRunner::new(wins, config)),
            RunnerKind::Parallel => Box::new(ParallelRunner::new(workers, config)),
        }
    }
}

impl std::str::FromStr for RunnerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(RunnerKind::Single),
            "untilwin" | "until-win" => Ok(RunnerKind::UntilWin),
            "multiwin" | "multi-win" => Ok(RunnerKind::MultiWin),
            "parallel" => Ok(RunnerKind::Parallel),
            _ => Err(Error::UnknownRunner(s.to_string())),
        }
    }
}

impl std::fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunnerKind::Single => "single",
            RunnerKind::UntilWin => "untilwin",
            RunnerKind::MultiWin => "multiwin",
            RunnerKind::Parallel => "parallel",
        };
        f.write_str(name)
    }
}
