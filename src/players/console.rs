//! Interactive terminal player.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::warn;

use crate::core::{Board, Direction};
use crate::error::Result;
use crate::game::Game;
use crate::rules::GameStatus;

use super::Player;

/// A human at a terminal. `i`/`k`/`j`/`l` move Up/Down/Left/Right.
///
/// Generic over its streams so scripted input can stand in for a terminal.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    pending: VecDeque<char>,
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    /// A player reading stdin and writing stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next typed key, or `None` at end of input.
    fn next_key(&mut self) -> Result<Option<char>> {
        if self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.chars());
        }
        Ok(self.pending.pop_front())
    }

    fn show(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output, "\nScore: {}\tMoves: {}\n", game.score(), game.total_moves())?;
        writeln!(self.output, "{}", game)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn choose(&mut self, _board: &Board) -> Option<Direction> {
        loop {
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(dir) = Direction::from_key(key) {
                        return Some(dir);
                    }
                }
                Ok(None) => return None,
                Err(e) => {
                    warn!("reading console input failed: {}", e);
                    return None;
                }
            }
        }
    }

    fn play(&mut self, game: &mut Game) -> Result<()> {
        writeln!(self.output, "Use IJKL for Up Left Down Right")?;

        let mut redraw = true;
        loop {
            if redraw {
                self.show(game)?;
            }
            redraw = true;

            if game.status().is_terminal() {
                break;
            }

            match self.next_key()? {
                None => break,
                Some('\n') | Some('\r') => redraw = false,
                Some(key) => {
                    if let Some(dir) = Direction::from_key(key) {
                        game.apply_move(dir);
                    }
                }
            }
        }

        match game.status() {
            GameStatus::Lost => writeln!(self.output, "YOU LOST")?,
            GameStatus::Won => writeln!(self.output, "YOU WON")?,
            GameStatus::Playing => {}
        }
        self.output.flush()?;
        Ok(())
    }
}
