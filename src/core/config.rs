//! Game configuration types.
//!
//! A `GameConfig` is fixed once a game starts. Runners clone it for every
//! game they construct.

use serde::{Deserialize, Serialize};

/// Highest supported win exponent (2^13 = 8192).
pub const MAX_WIN_POWER: u32 = 13;

/// When the per-move tile count is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Two tiles at start, `tiles_per_move` tiles after every board-changing move.
    #[default]
    EveryMove,
    /// Two tiles plus `tiles_per_move` extra at start, one tile after every
    /// board-changing move.
    StartOnly,
}

impl SpawnPolicy {
    /// Tiles placed when the game is constructed.
    #[must_use]
    pub fn initial_tiles(self, tiles_per_move: u32) -> u32 {
        match self {
            SpawnPolicy::EveryMove => 2,
            SpawnPolicy::StartOnly => 2 + tiles_per_move,
        }
    }

    /// Tiles placed after each board-changing move.
    #[must_use]
    pub fn tiles_after_move(self, tiles_per_move: u32) -> u32 {
        match self {
            SpawnPolicy::EveryMove => tiles_per_move,
            SpawnPolicy::StartOnly => 1,
        }
    }
}

impl std::fmt::Display for SpawnPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnPolicy::EveryMove => write!(f, "every-move"),
            SpawnPolicy::StartOnly => write!(f, "start-only"),
        }
    }
}

/// Complete game configuration.
///
/// Builder methods assert their preconditions: an out-of-range win power
/// is a programmer error, not a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells (>= 1).
    pub width: usize,

    /// Board height in cells (>= 1).
    pub height: usize,

    /// Exponent of the winning tile. `win_value() == 1 << win_power`.
    pub win_power: u32,

    /// Random tiles spawned per board-changing move.
    pub tiles_per_move: u32,

    /// Whether `tiles_per_move` applies per move or only at start.
    pub spawn_policy: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            win_power: 11,
            tiles_per_move: 1,
            spawn_policy: SpawnPolicy::EveryMove,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "Board width must be at least 1");
        assert!(height > 0, "Board height must be at least 1");

        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the win exponent.
    #[must_use]
    pub fn with_win_power(mut self, power: u32) -> Self {
        assert!(
            power <= MAX_WIN_POWER,
            "Limit powers greater than {} are not supported",
            MAX_WIN_POWER
        );
        self.win_power = power;
        self
    }

    /// Set the tile count spawned per move.
    ///
    /// Zero is allowed for fixed-layout games. Such a game may never end, so
    /// drive it with a bounded loop (`Player::play_at_most`,
    /// `RunnerConfig::with_max_moves`).
    #[must_use]
    pub fn with_tiles_per_move(mut self, tiles: u32) -> Self {
        self.tiles_per_move = tiles;
        self
    }

    /// Set the spawn policy.
    #[must_use]
    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    /// Tile value that wins the game.
    #[must_use]
    pub fn win_value(&self) -> u64 {
        1u64 << self.win_power
    }

    /// Total cell count.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 4);
        assert_eq!(config.win_value(), 2048);
        assert_eq!(config.tiles_per_move, 1);
        assert_eq!(config.spawn_policy, SpawnPolicy::EveryMove);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(5, 3)
            .with_win_power(13)
            .with_tiles_per_move(2)
            .with_spawn_policy(SpawnPolicy::StartOnly);

        assert_eq!(config.cell_count(), 15);
        assert_eq!(config.win_value(), 8192);
        assert_eq!(config.tiles_per_move, 2);
        assert_eq!(config.spawn_policy, SpawnPolicy::StartOnly);
    }

    #[test]
    #[should_panic(expected = "Limit powers greater than 13 are not supported")]
    fn test_win_power_too_large() {
        let _ = GameConfig::default().with_win_power(14);
    }

    #[test]
    #[should_panic(expected = "Board width must be at least 1")]
    fn test_zero_width() {
        GameConfig::new(0, 4);
    }

    #[test]
    fn test_spawn_policy_counts() {
        assert_eq!(SpawnPolicy::EveryMove.initial_tiles(3), 2);
        assert_eq!(SpawnPolicy::EveryMove.tiles_after_move(3), 3);
        assert_eq!(SpawnPolicy::StartOnly.initial_tiles(3), 5);
        assert_eq!(SpawnPolicy::StartOnly.tiles_after_move(3), 1);
        assert_eq!(SpawnPolicy::StartOnly.to_string(), "start-only");
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(3, 7).with_win_power(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
