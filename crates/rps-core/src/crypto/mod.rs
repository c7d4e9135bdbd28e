//! Cryptographic primitives for the commit-reveal protocol.
//!
//! This module provides:
//! - CommitmentKey and KeySource for fresh per-round secrets
//! - Digest and MacProvider for the keyed digest over a move name
//! - CommitmentGenerator and Commitment for commit, then reveal

mod commitment;
mod key;
mod mac;

pub use commitment::{Commitment, CommitmentGenerator};
pub use key::{CommitmentKey, KeySource, OsKeySource, RAW_KEY_BYTES};
pub use mac::{Digest, HmacSha256, MacProvider};

use thiserror::Error;

/// Errors from the commitment primitives
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Secure randomness unavailable: {0}")]
    Randomness(String),

    #[error("Keyed digest failed: {0}")]
    Mac(String),

    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
