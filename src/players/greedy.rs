//! Merge-maximizing player.

use smallvec::SmallVec;

use crate::core::{Board, Direction, GameRng};

use super::Player;

/// Picks the direction that merges the most tiles this turn.
///
/// Ties are broken uniformly at random. When no direction merges anything,
/// all four directions are candidates.
#[derive(Clone, Debug)]
pub struct GreedyPlayer {
    rng: GameRng,
}

impl GreedyPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of merges a move toward `dir` would perform.
///
/// Empty cells between equal tiles do not block a merge.
#[must_use]
pub fn count_merges(board: &Board, dir: Direction) -> usize {
    (0..board.line_count(dir))
        .map(|line| {
            let tiles = board.read_line(dir, line);
            let mut merges = 0;
            let mut i = 0;
            while i + 1 < tiles.len() {
                if tiles[i] == tiles[i + 1] {
                    merges += 1;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            merges
        })
        .sum()
}

impl Player for GreedyPlayer {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, board: &Board) -> Option<Direction> {
        let mut best: SmallVec<[Direction; 4]> = SmallVec::new();
        let mut best_merges = 0;

        for dir in Direction::ALL {
            let merges = count_merges(board, dir);
            if merges == 0 {
                continue;
            }
            if merges > best_merges {
                best_merges = merges;
                best.clear();
            }
            if merges == best_merges {
                best.push(dir);
            }
        }

        if best.is_empty() {
            best.extend_from_slice(&Direction::ALL);
        }

        self.rng.choose(&best).copied()
    }
}
