//! Provably fair rock-paper-scissors over any odd number of moves.
//!
//! This crate provides the HMAC commit-reveal primitives, the circular
//! outcome rule generalised to `n` moves, and the console game session
//! that ties them together.

pub mod crypto;
pub mod error;
pub mod games;
pub mod presentation;
pub mod protocol;

pub use crypto::{Commitment, CommitmentGenerator, CommitmentKey, CryptoError, Digest};
pub use error::GameError;
pub use games::{MoveSet, MoveSetError, Outcome, OutcomeMatrix};
pub use presentation::{AsciiTable, ConsolePresenter, Presenter, TableRenderer};
pub use protocol::{GameSession, LineInput, MoveInput, ScriptedInput, SessionSummary};
