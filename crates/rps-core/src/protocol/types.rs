//! Protocol types.

use crate::games::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running tally of decided rounds, from the human's side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl SessionSummary {
    /// Count one decided round
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rounds: {} won, {} lost, {} drawn",
            self.rounds, self.wins, self.losses, self.draws
        )
    }
}
