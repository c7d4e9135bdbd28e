//! Text console presenter.

use super::{AsciiTable, Presenter, TableRenderer};
use crate::crypto::{CommitmentKey, Digest};
use crate::games::{MoveSet, Outcome, RulesTable};
use crate::protocol::{InputError, HELP_COMMAND};
use std::io::{self, Write};

/// Writes session events as plain text lines to `out`
pub struct ConsolePresenter<W, T = AsciiTable> {
    out: W,
    renderer: T,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self::with_renderer(out, AsciiTable)
    }
}

impl<W: Write, T: TableRenderer> ConsolePresenter<W, T> {
    pub fn with_renderer(out: W, renderer: T) -> Self {
        Self { out, renderer }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, T: TableRenderer> Presenter for ConsolePresenter<W, T> {
    fn commitment(&mut self, digest: &Digest) -> io::Result<()> {
        writeln!(self.out, "HMAC: {digest}")
    }

    fn menu(&mut self, moves: &MoveSet) -> io::Result<()> {
        writeln!(self.out, "Available moves:")?;
        for (i, name) in moves.iter().enumerate() {
            writeln!(self.out, "{} - {}", i + 1, name)?;
        }
        writeln!(self.out, "0 - exit")?;
        writeln!(self.out, "{HELP_COMMAND} - help")
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Enter your move: ")?;
        self.out.flush()
    }

    fn human_move(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Your move: {name}")
    }

    fn invalid_input(&mut self, _error: &InputError) -> io::Result<()> {
        writeln!(self.out, "Error: Invalid move")
    }

    fn help(&mut self, table: &RulesTable) -> io::Result<()> {
        writeln!(self.out, "{}", self.renderer.render(table))
    }

    fn computer_move(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Computer move: {name}")
    }

    fn outcome(&mut self, outcome: Outcome) -> io::Result<()> {
        let line = match outcome {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        };
        writeln!(self.out, "{line}")
    }

    fn reveal(&mut self, key: &CommitmentKey) -> io::Result<()> {
        writeln!(self.out, "HMAC key: {}", key.to_hex())?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn exit(&mut self) -> io::Result<()> {
        writeln!(self.out, "You exited the game")?;
        self.out.flush()
    }
}
