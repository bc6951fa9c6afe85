//! Core building blocks: board grid, directions, RNG, configuration.
//!
//! Nothing here knows the merge rules. The engine in `crate::game` combines
//! these types into a playable game.

pub mod board;
pub mod config;
pub mod direction;
pub mod rng;

pub use board::{Board, Line};
pub use config::{GameConfig, SpawnPolicy, MAX_WIN_POWER};
pub use direction::Direction;
pub use rng::GameRng;
