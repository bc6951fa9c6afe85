//! # rust-2048
//!
//! The sliding-tile merging puzzle, as an engine plus the tooling to play it
//! and to simulate it at scale.
//!
//! ## Design Principles
//!
//! 1. **Total engine**: every move is defined. Moves after the game ends and
//!    spawns on a full board are no-ops, not errors. The only fatal input is
//!    a win exponent above `MAX_WIN_POWER`.
//!
//! 2. **Owned randomness**: each `Game` and each player owns its own
//!    `GameRng`, seeded once from OS entropy or an explicit seed. Parallel
//!    games never share or correlate a stream.
//!
//! 3. **Narrow seams**: players see a read-only `Board` and act through
//!    `Game::apply_move`; runners only build games and players and collect
//!    `GameSummary` snapshots.
//!
//! ## Modules
//!
//! - `core`: board grid, directions, RNG, configuration
//! - `rules`: line consolidation and win/loss detection
//! - `game`: the move/placement state machine
//! - `players`: console, random and greedy strategies
//! - `runners`: single, until-win, multi-win and parallel simulation
//!
//! ```
//! use rust_2048::{Direction, Game, GameConfig, GameStatus};
//!
//! let config = GameConfig::new(2, 2).with_win_power(3);
//! let mut game = Game::from_rows(config, &[[4u64, 4], [0, 0]], 1).unwrap();
//!
//! game.apply_move(Direction::Left);
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.score(), 8);
//! ```

pub mod core;
pub mod error;
pub mod game;
pub mod players;
pub mod rules;
pub mod runners;

// Re-export commonly used types
pub use crate::core::{Board, Direction, GameConfig, GameRng, SpawnPolicy, MAX_WIN_POWER};

pub use crate::error::{Error, Result};

pub use crate::game::{Game, MoveOutcome};

pub use crate::rules::{consolidate, GameStatus};

pub use crate::players::{ConsolePlayer, GreedyPlayer, Player, PlayerFactory, PlayerKind, RandomPlayer};

pub use crate::runners::{
    GameSource, GameSummary, MultiWinRunner, ParallelRunner, RunReport, Runner, RunnerConfig,
    RunnerKind, SingleRunner, UntilWinRunner, WinRecord,
};
