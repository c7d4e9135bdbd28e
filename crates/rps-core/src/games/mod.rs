//! Move sets and the rules deciding between them.

mod moves;
mod outcome;

pub use moves::{MoveSet, MoveSetError};
pub use outcome::{Outcome, OutcomeMatrix, RulesTable, RULES_CORNER_LABEL};
