//! UCI command handling, independent of where the lines come from.

use std::io::{self, Write};

use chess_core::{move_to_uci, set_position_from_uci, Engine, Game};
use minimax_engine::Difficulty;
use tracing::{debug, warn};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    engine: Box<dyn Engine>,
    game: Game,
    difficulty: Difficulty,
}

impl Session {
    pub fn new(engine: Box<dyn Engine>, difficulty: Difficulty) -> Self {
        Self {
            engine,
            game: Game::default(),
            difficulty,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Difficulty type combo default {} var low var medium var high",
                    self.difficulty
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(&parts[1..]),
            "ucinewgame" => {
                self.game = Game::default();
                self.engine.new_game();
            }
            "position" => match set_position_from_uci(&parts[1..]) {
                Ok(game) => self.game = game,
                Err(e) => warn!("ignoring position command: {e}"),
            },
            "go" => {
                // Time controls are ignored; the difficulty fixes the effort.
                let result = self.engine.choose_move(&mut self.game);
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            "quit" => return Ok(Flow::Quit),
            other => debug!("unknown command {other:?}"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `name <id...> [value <x...>]`
    fn set_option(&mut self, args: &[&str]) {
        let value_at = args.iter().position(|&a| a == "value");
        let name = match args.split_first() {
            Some((&"name", rest)) => {
                let end = value_at.map_or(rest.len(), |i| i - 1);
                rest[..end].join(" ")
            }
            _ => {
                warn!("malformed setoption: {}", args.join(" "));
                return;
            }
        };
        let value = value_at.map(|i| args[i + 1..].join(" ")).unwrap_or_default();

        if !self.engine.set_option(&name, &value) {
            warn!("unsupported option {name} = {value}");
            return;
        }
        if name.eq_ignore_ascii_case("difficulty") {
            if let Ok(difficulty) = value.parse() {
                self.difficulty = difficulty;
            }
        }
        debug!("option {name} = {value}");
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
