//! Uniformly random player.

use crate::core::{Board, Direction, GameRng};

use super::Player;

/// Picks one of the four directions uniformly at random every turn.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a player seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a player with a reproducible stream.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, _board: &Board) -> Option<Direction> {
        self.rng.choose(&Direction::ALL).copied()
    }
}
