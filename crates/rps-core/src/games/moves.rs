//! Validated list of move names.

use std::collections::HashSet;
use thiserror::Error;

/// Why a move list cannot start a game
///
/// Only the first failing check is reported, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("Insufficient number of arguments. Enter at least 3 arguments")]
    TooFewMoves { count: usize },

    #[error("Even number of arguments. Enter odd number of arguments")]
    EvenMoveCount { count: usize },

    #[error("Repeated arguments. Enter an unique set of arguments")]
    DuplicateMove { name: String },
}

/// Ordered, duplicate-free, odd-sized list of moves
///
/// The order defines the rules: every move loses to the next half of
/// the circle and beats the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Smallest playable move set
    pub const MIN_MOVES: usize = 3;

    /// Trim raw arguments, drop empty ones, then validate
    pub fn new<I, S>(args: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let moves: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().trim().to_string())
            .filter(|arg| !arg.is_empty())
            .collect();
        Self::validate(&moves)?;
        Ok(Self(moves))
    }

    /// Check a move list without taking ownership of it
    pub fn validate(moves: &[String]) -> Result<(), MoveSetError> {
        let count = moves.len();
        if count < Self::MIN_MOVES {
            return Err(MoveSetError::TooFewMoves { count });
        }
        if count % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount { count });
        }
        let mut seen = HashSet::with_capacity(count);
        if let Some(dup) = moves.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(MoveSetError::DuplicateMove { name: dup.clone() });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true once validated
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name of the move at `position`
    pub fn name(&self, position: usize) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Position of the move called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
