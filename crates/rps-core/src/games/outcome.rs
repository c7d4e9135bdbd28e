//! Circular win/lose rule for any odd number of moves.

use super::MoveSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner cell of the rules table
pub const RULES_CORNER_LABEL: &str = "Game Rules";

/// Result of one move against another, from the first move's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Same pairing seen from the other side
    pub fn inverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome relation over the positions of a move set
///
/// Positions are read as a circle. For `p != q`, let
/// `d = (q - p) mod n`: if `d <= (n - 1) / 2` then `q` beats `p`,
/// otherwise `p` beats `q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeMatrix {
    size: usize,
}

impl OutcomeMatrix {
    pub fn new(moves: &MoveSet) -> Self {
        Self { size: moves.len() }
    }

    /// Number of moves
    pub fn size(&self) -> usize {
        self.size
    }

    /// How many moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        (self.size - 1) / 2
    }

    /// Outcome of position `p` played against position `q`
    ///
    /// Panics if either position is outside the move set.
    pub fn outcome(&self, p: usize, q: usize) -> Outcome {
        assert!(
            p < self.size && q < self.size,
            "position out of range: ({p}, {q}) for {} moves",
            self.size
        );
        let d = (q + self.size - p) % self.size;
        if d == 0 {
            Outcome::Draw
        } else if d <= self.half() {
            Outcome::Lose
        } else {
            Outcome::Win
        }
    }

    /// Positions that `p` beats
    pub fn beats(&self, p: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&q| self.outcome(p, q) == Outcome::Win)
    }

    /// Positions that beat `p`
    pub fn beaten_by(&self, p: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&q| self.outcome(p, q) == Outcome::Lose)
    }

    /// Full table for the help screen, rows read against columns
    pub fn rules_table(&self, moves: &MoveSet) -> RulesTable {
        let header: Vec<String> = std::iter::once(RULES_CORNER_LABEL.to_string())
            .chain(moves.iter().map(str::to_uppercase))
            .collect();
        let rows: Vec<Vec<String>> = moves
            .iter()
            .enumerate()
            .map(|(p, name)| {
                std::iter::once(name.to_uppercase())
                    .chain((0..self.size).map(|q| self.outcome(p, q).to_string()))
                    .collect::<Vec<String>>()
            })
            .collect();
        RulesTable { header, rows }
    }
}

/// Help table data: a header row plus one row per move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulesTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RulesTable {
    /// Rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
