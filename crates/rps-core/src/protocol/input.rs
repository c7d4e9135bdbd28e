//! Reading and interpreting the human's move.

use crate::games::MoveSet;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use thiserror::Error;

/// Input asking for the rules table
pub const HELP_COMMAND: &str = "?";

/// Rejected move input; recovered by re-prompting
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Not a move number: {0:?}")]
    NotANumber(String),

    #[error("Move {selected} is out of range 1..={max}")]
    OutOfRange { selected: usize, max: usize },
}

/// What a line of input asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCommand {
    /// Play the move at this zero-based position
    Play(usize),
    Exit,
    Help,
}

impl MoveCommand {
    /// Interpret one line against the menu for `moves`
    ///
    /// The menu is one-based; `0` exits and `?` asks for help.
    pub fn parse(raw: &str, moves: &MoveSet) -> Result<Self, InputError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(InputError::Empty);
        }
        if input == HELP_COMMAND {
            return Ok(MoveCommand::Help);
        }
        let selected: usize = input
            .parse()
            .map_err(|_| InputError::NotANumber(input.to_string()))?;
        match selected {
            0 => Ok(MoveCommand::Exit),
            n if n <= moves.len() => Ok(MoveCommand::Play(n - 1)),
            _ => Err(InputError::OutOfRange {
                selected,
                max: moves.len(),
            }),
        }
    }
}

/// Source of the human's input lines
///
/// The session blocks here; it is the only place a round waits.
pub trait MoveInput {
    /// Next line without its line ending, or `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Line reader over any buffered source, usually locked stdin
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> MoveInput for LineInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Pre-recorded input for tests and demos
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveInput for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
