//! Run statistics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Board;
use crate::game::Game;
use crate::rules::GameStatus;

/// Immutable snapshot of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub status: GameStatus,
    pub score: u64,
    pub moves: u64,
    pub board: Board,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            status: game.status(),
            score: game.score(),
            moves: game.total_moves(),
            board: game.board().clone(),
        }
    }
}

impl GameSummary {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// A won game and how many games it took to get there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub games_to_win: u64,
    pub game: GameSummary,
}

/// Aggregate result of a runner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// Name of the runner that produced this report.
    pub runner: String,

    /// Games played in total.
    pub games: u64,

    /// Moves across every game played.
    pub moves: u64,

    /// Every win, in order.
    pub wins: Vec<WinRecord>,

    /// The last game recorded (the winning one for win-seeking runners).
    pub last: Option<GameSummary>,

    /// Wall-clock time for the run.
    pub elapsed: Duration,

    /// Games played since the previous win.
    #[serde(skip)]
    since_win: u64,
}

impl RunReport {
    pub fn new(runner: impl Into<String>) -> Self {
        Self {
            runner: runner.into(),
            games: 0,
            moves: 0,
            wins: Vec::new(),
            last: None,
            elapsed: Duration::ZERO,
            since_win: 0,
        }
    }

    /// Fold one finished game into the totals.
    pub fn record(&mut self, game: GameSummary) {
        self.games += 1;
        self.moves += game.moves;
        self.since_win += 1;

        if game.is_win() {
            self.wins.push(WinRecord {
                games_to_win: self.since_win,
                game: game.clone(),
            });
            self.since_win = 0;
        }
        self.last = Some(game);
    }

    /// Whether the most recently recorded game was won.
    #[must_use]
    pub fn last_won(&self) -> bool {
        self.last.as_ref().is_some_and(GameSummary::is_win)
    }

    /// Average moves per game played.
    #[must_use]
    pub fn avg_moves(&self) -> f64 {
        ratio(self.moves, self.games)
    }

    /// Average games needed per win.
    #[must_use]
    pub fn avg_games_to_win(&self) -> f64 {
        ratio(self.wins.iter().map(|w| w.games_to_win).sum(), self.wins.len() as u64)
    }

    /// Average moves in winning games.
    #[must_use]
    pub fn avg_winning_moves(&self) -> f64 {
        ratio(self.wins.iter().map(|w| w.game.moves).sum(), self.wins.len() as u64)
    }

    /// Average score of winning games.
    #[must_use]
    pub fn avg_winning_score(&self) -> f64 {
        ratio(self.wins.iter().map(|w| w.game.score).sum(), self.wins.len() as u64)
    }
}

fn ratio(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
