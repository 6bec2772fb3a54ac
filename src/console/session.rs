use std::io::{self, BufRead, Write};

use log::debug;

use super::prompt::{column_request, parse_column, wants_to_quit};
use super::render::render_board;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{Game, TurnState};

/// Line-oriented game session: prompts on `output`, reads choices from
/// `input`, and offers a new game after each one ends.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Session {
            input,
            output,
            config,
        }
    }

    /// Play games until a player asks to quit or input runs out.
    /// Returns the final state of every game that reached an end.
    pub fn run(&mut self) -> io::Result<Vec<TurnState>> {
        let mut finished = Vec::new();
        loop {
            match self.play_game()? {
                Some(state) => finished.push(state),
                None => break,
            }

            writeln!(self.output, "Quit Playing? y/n")?;
            match self.read_line()? {
                Some(answer) if !wants_to_quit(&answer) => continue,
                _ => break,
            }
        }
        Ok(finished)
    }

    /// Play one game to the end. `None` means input ended first.
    pub fn play_game(&mut self) -> io::Result<Option<TurnState>> {
        let mut game = Game::new(
            self.config.players.first.clone(),
            self.config.players.second.clone(),
        );
        writeln!(self.output, "Welcome to connect four!")?;

        while let Some(mark) = game.state().active() {
            let name = game.player(mark).name().to_string();
            let Some(choice) = self.choose_column(&name)? else {
                debug!("input closed during {name}'s turn");
                return Ok(None);
            };

            match game.step(choice) {
                Ok(_) => {
                    let board = render_board(game.board().snapshot(), &self.config.display);
                    write!(self.output, "{board}")?;
                }
                Err(MoveError::ColumnFull) => writeln!(self.output, "column full")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }

        let state = game.state();
        match game.winner() {
            Some(winner) => writeln!(self.output, "{} Won!", winner.name())?,
            None => writeln!(self.output, "Tie Game!")?,
        }
        Ok(Some(state))
    }

    /// Ask until a valid column arrives. `None` when input is exhausted.
    fn choose_column(&mut self, name: &str) -> io::Result<Option<usize>> {
        loop {
            writeln!(self.output, "{}", column_request(name))?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(choice) = parse_column(&line) {
                return Ok(Some(choice));
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Hand back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}
