//! Terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Lifecycle of a game. Moves only have an effect while `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_playing(self) -> bool {
        self == GameStatus::Playing
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_playing()
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Playing => "Playing",
            GameStatus::Won => "Won",
            GameStatus::Lost => "Lost",
        };
        f.write_str(name)
    }
}

/// True when any cell holds the winning value.
#[must_use]
pub fn is_win(board: &Board, win_value: u64) -> bool {
    board.contains(win_value)
}

/// True when the board is full and no two neighbours are equal.
#[must_use]
pub fn is_loss(board: &Board) -> bool {
    board.is_full() && !board.has_adjacent_equal()
}

/// Status for `board`. A win takes priority over a loss.
#[must_use]
pub fn evaluate(board: &Board, win_value: u64) -> GameStatus {
    if is_win(board, win_value) {
        GameStatus::Won
    } else if is_loss(board) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
