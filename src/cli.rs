#![cfg(feature = "std")]

//! Line-oriented command front end for a [`GameSession`].

use std::fmt;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    common::{Coord, Side},
    game::GameSession,
    renderer::BoardRenderer,
    targeting::FireOutcome,
};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stage a cell on the opponent board.
    Select(Coord),
    Fire,
    Reroll(Side),
    Show,
    Help,
    Quit,
}

/// Why an input line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    BadCoordinate(String),
    BadSide(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownCommand(c) => write!(f, "unknown command '{}'", c),
            CommandError::MissingArgument(what) => write!(f, "missing {}", what),
            CommandError::BadCoordinate(c) => {
                write!(f, "invalid cell '{}', expected A1..J10", c)
            }
            CommandError::BadSide(s) => {
                write!(f, "invalid side '{}', expected player or opponent", s)
            }
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
Commands:
  select <cell>              stage a cell on the opponent board (e.g. select B7)
  fire                       fire at the staged cell
  reroll <player|opponent>   place a new fleet on that board
  show                       redraw both boards
  help                       show this message
  quit                       leave the game";

/// Parse `B7`-style labels: column letter then 1-based row.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let digits = chars.as_str();
    if digits.is_empty()
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    Coord::new(row - 1, col).ok()
}

/// Parse a board name: `player`/`p` or `opponent`/`o`, any case.
pub fn parse_side(input: &str) -> Option<Side> {
    match input.to_ascii_lowercase().as_str() {
        "player" | "p" => Some(Side::Player),
        "opponent" | "o" => Some(Side::Opponent),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(CommandError::Empty)?;
    let arg = words.next();
    match verb.to_ascii_lowercase().as_str() {
        "select" | "s" => {
            let raw = arg.ok_or(CommandError::MissingArgument("cell"))?;
            parse_coord(raw)
                .map(Command::Select)
                .ok_or_else(|| CommandError::BadCoordinate(raw.to_string()))
        }
        "fire" | "f" => Ok(Command::Fire),
        "reroll" | "r" => {
            let raw = arg.ok_or(CommandError::MissingArgument("side"))?;
            parse_side(raw)
                .map(Command::Reroll)
                .ok_or_else(|| CommandError::BadSide(raw.to_string()))
        }
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Read commands from `input` until `quit` or end of input, applying them to
/// `session`. Prompts and errors go to `out`; boards go through the session's
/// renderer.
pub fn run<G, V, I, O>(
    session: &mut GameSession<G, V>,
    input: I,
    mut out: O,
) -> anyhow::Result<()>
where
    G: Rng,
    V: BoardRenderer,
    I: BufRead,
    O: Write,
{
    writeln!(out, "{}", HELP)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        match command {
            Command::Select(coord) => {
                session.select_cell(Side::Opponent, coord.row(), coord.col())?;
            }
            Command::Fire => {
                if session.fire_at_selected() == FireOutcome::NoOp {
                    writeln!(out, "Select a cell first.")?;
                }
            }
            Command::Reroll(side) => {
                session.reroll_board(side)?;
            }
            Command::Show => session.redraw(),
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}
