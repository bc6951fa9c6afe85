//! Players: strategies that drive a `Game` to completion.
//!
//! A player only sees a read-only `Board` when choosing, and acts through
//! `Game::apply_move`. Every player owns whatever state it needs
//! (an RNG, an input stream), so independent players never share anything.
//!
//! - `RandomPlayer`: uniform over the four directions
//! - `GreedyPlayer`: the direction with the most merges, ties broken randomly
//! - `ConsolePlayer`: a human typing `i`/`j`/`k`/`l`

pub mod console;
pub mod greedy;
pub mod random;

pub use console::ConsolePlayer;
pub use greedy::GreedyPlayer;
pub use random::RandomPlayer;

use crate::core::{Board, Direction};
use crate::error::{Error, Result};
use crate::game::Game;

/// Something that can attempt to win a game.
pub trait Player {
    /// Short name, as used on the command line.
    fn name(&self) -> &'static str;

    /// Pick the next direction for `board`. `None` ends play early.
    fn choose(&mut self, board: &Board) -> Option<Direction>;

    /// Drive `game` until it is over or `choose` gives up.
    fn play(&mut self, game: &mut Game) -> Result<()> {
        while game.status().is_playing() {
            match self.choose(game.board()) {
                Some(dir) => {
                    game.apply_move(dir);
                }
                None => break,
            }
        }
        Ok(())
    }

    /// Like `play`, but give up after `turns` choices.
    ///
    /// A game that spawns no tiles can slide its last tiles around forever.
    /// Runners use this to bound every game they drive.
    fn play_at_most(&mut self, game: &mut Game, turns: u64) -> Result<()> {
        for _ in 0..turns {
            if game.status().is_terminal() {
                break;
            }
            match self.choose(game.board()) {
                Some(dir) => {
                    game.apply_move(dir);
                }
                None => break,
            }
        }
        Ok(())
    }
}

/// Builds a fresh player for every game. Shared across worker threads.
pub type PlayerFactory = dyn Fn() -> Box<dyn Player + Send> + Send + Sync;

/// Player strategies selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Console,
    Random,
    Greedy,
}

impl PlayerKind {
    /// Whether this player reads from the terminal.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        self == PlayerKind::Console
    }

    /// Construct a new player of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Player + Send> {
        match self {
            PlayerKind::Console => Box::new(ConsolePlayer::stdio()),
            PlayerKind::Random => Box::new(RandomPlayer::new()),
            PlayerKind::Greedy => Box::new(GreedyPlayer::new()),
        }
    }

    /// A factory producing a new player of this kind per call.
    #[must_use]
    pub fn factory(self) -> Box<PlayerFactory> {
        Box::new(move || self.build())
    }
}

impl std::str::FromStr for PlayerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "manual" => Ok(PlayerKind::Console),
            "random" => Ok(PlayerKind::Random),
            "greedy" => Ok(PlayerKind::Greedy),
            _ => Err(Error::UnknownPlayer(s.to_string())),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerKind::Console => "console",
            PlayerKind::Random => "random",
            PlayerKind::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    struct Scripted(Vec<Direction>);

    impl Player for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn choose(&mut self, _board: &Board) -> Option<Direction> {
            self.0.pop()
        }
    }

    #[test]
    fn test_default_play_stops_when_choose_gives_up() {
        let mut game = Game::from_rows(GameConfig::new(2, 2), &[[2u64, 0], [0, 0]], 0).unwrap();
        let mut player = Scripted(vec![Direction::Right]);

        player.play(&mut game).unwrap();

        assert_eq!(game.total_moves(), 1);
        assert!(game.status().is_playing());
    }

    #[test]
    fn test_play_at_most_stops_at_turn_limit() {
        let config = GameConfig::new(2, 2).with_tiles_per_move(0);
        let mut game = Game::from_rows(config, &[[0u64, 2], [0, 0]], 0).unwrap();
        let mut player = Scripted([Direction::Right, Direction::Left].repeat(10));

        player.play_at_most(&mut game, 3).unwrap();

        assert_eq!(game.total_moves(), 3);
        assert!(game.status().is_playing());
    }

    #[test]
    fn test_player_kind_parse() {
        assert_eq!("greedy".parse::<PlayerKind>().unwrap(), PlayerKind::Greedy);
        assert_eq!("Random".parse::<PlayerKind>().unwrap(), PlayerKind::Random);
        assert_eq!("manual".parse::<PlayerKind>().unwrap(), PlayerKind::Console);
        assert!(matches!("bogus".parse::<PlayerKind>(), Err(Error::UnknownPlayer(_))));
    }

    #[test]
    fn test_factory_builds_named_players() {
        let factory = PlayerKind::Greedy.factory();
        assert_eq!(factory().name(), "greedy");
        assert_eq!(PlayerKind::Random.build().name(), "random");
        assert!(PlayerKind::Console.is_interactive());
        assert_eq!(PlayerKind::Greedy.to_string(), "greedy");
    }
}
