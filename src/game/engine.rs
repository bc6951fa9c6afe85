//! The board transition engine.

use log::{debug, trace};

use crate::core::{Board, Direction, GameConfig, GameRng, MAX_WIN_POWER};
use crate::error::{Error, Result};
use crate::rules::{self, consolidate, GameStatus};

/// Probability that a spawned tile is a 4 rather than a 2.
const FOUR_PROBABILITY: f64 = 0.1;

/// Result of a single `Game::apply_move` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any cell changed.
    pub changed: bool,
    /// Score gained from merges in this move.
    pub score_delta: u64,
}

/// One game of 2048.
///
/// A `Game` is owned by a single session: it has no interior locking and
/// carries its own RNG. Create one per game and drop it once `status()` is
/// terminal.
///
/// ```
/// use rust_2048::{Direction, Game, GameConfig};
///
/// let mut game = Game::with_seed(GameConfig::default(), 7);
/// assert_eq!(game.board().tile_count(), 2);
///
/// game.apply_move(Direction::Left);
/// assert!(game.total_moves() <= 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    rng: GameRng,
    score: u64,
    moves: u64,
    status: GameStatus,
}

impl Game {
    /// Start a new game with an RNG seeded from OS entropy.
    ///
    /// Panics if `config.win_power` exceeds `MAX_WIN_POWER`.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a new game with a fixed seed, for reproducible play.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a new game driven by `rng`.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        Self::check_config(&config);

        let mut game = Self {
            board: Board::new(config.width, config.height),
            config,
            rng,
            score: 0,
            moves: 0,
            status: GameStatus::Playing,
        };

        for _ in 0..config.spawn_policy.initial_tiles(config.tiles_per_move) {
            game.place_new();
        }
        game.status = rules::evaluate(&game.board, config.win_value());

        debug!(
            "new {}x{} game, target {}, seed {:#x}",
            config.width,
            config.height,
            config.win_value(),
            game.rng.seed()
        );
        game
    }

    /// Install a fixed layout instead of random starting tiles.
    ///
    /// `rows` must match the configured dimensions. `seed` drives the tiles
    /// spawned by later moves.
    pub fn from_rows<R: AsRef<[u64]>>(config: GameConfig, rows: &[R], seed: u64) -> Result<Self> {
        Self::check_config(&config);

        let board = Board::from_rows(rows)?;
        if board.width() != config.width || board.height() != config.height {
            return Err(Error::InvalidBoard(format!(
                "layout is {}x{}, config expects {}x{}",
                board.width(),
                board.height(),
                config.width,
                config.height
            )));
        }

        let status = rules::evaluate(&board, config.win_value());
        Ok(Self {
            config,
            board,
            rng: GameRng::new(seed),
            score: 0,
            moves: 0,
            status,
        })
    }

    fn check_config(config: &GameConfig) {
        assert!(
            config.win_power <= MAX_WIN_POWER,
            "Limit powers greater than {} are not supported",
            MAX_WIN_POWER
        );
    }

    /// Shift and merge every line toward `dir`.
    ///
    /// No-op once the game is over. A move that leaves the board unchanged
    /// does not count and does not spawn tiles.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            return MoveOutcome::default();
        }

        let before = self.board.clone();
        let pad_to = self.board.line_len(dir);
        let mut score_delta = 0;

        for line in 0..self.board.line_count(dir) {
            let tiles = self.board.read_line(dir, line);
            if tiles.is_empty() {
                continue;
            }
            let (merged, score) = consolidate(&tiles, pad_to);
            score_delta += score;
            self.board.write_line(dir, line, &merged);
        }
        self.score += score_delta;

        let changed = self.board != before;
        if changed {
            self.moves += 1;
        }

        self.status = rules::evaluate(&self.board, self.config.win_value());

        if self.status.is_playing() && changed {
            let spawn = self
                .config
                .spawn_policy
                .tiles_after_move(self.config.tiles_per_move);
            for _ in 0..spawn {
                self.place_new();
            }
        }

        trace!("{} -> changed: {}, +{}", dir, changed, score_delta);
        if self.status.is_terminal() {
            debug!(
                "game {} after {} moves with score {}",
                self.status, self.moves, self.score
            );
        }

        MoveOutcome { changed, score_delta }
    }

    /// Put a 2 (90%) or 4 (10%) on a uniformly random empty cell.
    ///
    /// Returns the cell used, or `None` when the board is full.
    fn place_new(&mut self) -> Option<(usize, usize)> {
        if self.board.is_full() {
            return None;
        }

        let value = if self.rng.gen_bool(FOUR_PROBABILITY) { 4 } else { 2 };

        loop {
            let row = self.rng.gen_range_usize(0..self.board.height());
            let col = self.rng.gen_range_usize(0..self.board.width());
            if self.board.get(row, col) == 0 {
                self.board.set(row, col, value);
                return Some((row, col));
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Sum of every merge result so far.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Moves that changed the board.
    #[must_use]
    pub fn total_moves(&self) -> u64 {
        self.moves
    }

    #[must_use]
    pub fn win_value(&self) -> u64 {
        self.config.win_value()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}
