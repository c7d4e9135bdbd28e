//! Crate-level error type.

use crate::crypto::CryptoError;
use crate::games::MoveSetError;
use thiserror::Error;

/// Errors that end a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] MoveSetError),

    #[error("Cryptographic failure: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
