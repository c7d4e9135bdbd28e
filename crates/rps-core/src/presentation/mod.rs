//! Console rendering of session events.

mod console;
mod table;

pub use console::ConsolePresenter;
pub use table::{AsciiTable, TableRenderer};

use crate::crypto::{CommitmentKey, Digest};
use crate::games::{MoveSet, Outcome, RulesTable};
use crate::protocol::InputError;
use std::io;

/// Everything the session shows the player, in protocol order
pub trait Presenter {
    /// Publish the digest of the computer's sealed move
    fn commitment(&mut self, digest: &Digest) -> io::Result<()>;

    fn menu(&mut self, moves: &MoveSet) -> io::Result<()>;

    /// Ask for a move; called right before the session blocks on input
    fn prompt(&mut self) -> io::Result<()>;

    fn human_move(&mut self, name: &str) -> io::Result<()>;

    fn invalid_input(&mut self, error: &InputError) -> io::Result<()>;

    fn help(&mut self, table: &RulesTable) -> io::Result<()>;

    fn computer_move(&mut self, name: &str) -> io::Result<()>;

    /// Round result for the human
    fn outcome(&mut self, outcome: Outcome) -> io::Result<()>;

    /// Show the key after the round is decided
    fn reveal(&mut self, key: &CommitmentKey) -> io::Result<()>;

    fn exit(&mut self) -> io::Result<()>;
}
