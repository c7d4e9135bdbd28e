//! A single round, typed by protocol phase.
//!
//! `CommittedRound` only exposes the digest. The key is reachable only
//! after `resolve` has locked in the human's move.

use crate::crypto::{Commitment, CommitmentKey, Digest};
use crate::games::{Outcome, OutcomeMatrix};

/// Computer move fixed and sealed, waiting for the human
#[derive(Debug)]
pub struct CommittedRound {
    number: u64,
    computer: usize,
    commitment: Commitment,
}

impl CommittedRound {
    pub fn new(number: u64, computer: usize, commitment: Commitment) -> Self {
        Self {
            number,
            computer,
            commitment,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// The digest to publish before asking for the human's move
    pub fn digest(&self) -> &Digest {
        self.commitment.digest()
    }

    /// Lock in the human's move, decide the round and open the commitment
    pub fn resolve(self, matrix: &OutcomeMatrix, human: usize) -> ResolvedRound {
        let outcome = matrix.outcome(human, self.computer);
        let digest = self.commitment.digest().clone();
        ResolvedRound {
            number: self.number,
            human,
            computer: self.computer,
            outcome,
            digest,
            key: self.commitment.reveal(),
        }
    }
}

/// Decided round with its key revealed
#[derive(Clone, Debug)]
pub struct ResolvedRound {
    number: u64,
    human: usize,
    computer: usize,
    outcome: Outcome,
    digest: Digest,
    key: CommitmentKey,
}

impl ResolvedRound {
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn human(&self) -> usize {
        self.human
    }

    pub fn computer(&self) -> usize {
        self.computer
    }

    /// Outcome for the human
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn key(&self) -> &CommitmentKey {
        &self.key
    }
}
