//! Per-instance random number generation.
//!
//! Every engine and every player owns its own `GameRng`. Nothing is shared
//! between instances, so parallel games never contend on or correlate
//! through a global stream.
//!
//! ```
//! use rust_2048::core::GameRng;
//!
//! // Fixed seed for reproducible games
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(rng.gen_range_usize(0..100), again.gen_range_usize(0..100));
//!
//! // Seeded from OS entropy for real play
//! let mut live = GameRng::from_entropy();
//! assert!(live.gen_range_usize(0..4) < 4);
//! ```

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing tile spawns and randomized players.
///
/// The seed is harvested once (from OS entropy or the caller), then ChaCha8
/// drives every later draw.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG seeded from the operating system's secure entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(OsRng.next_u64())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream, e.g. one per worker thread.
    ///
    /// Forks are deterministic: the n-th fork of a given seed always yields
    /// the same sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
