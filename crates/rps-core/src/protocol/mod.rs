//! One-round commit-reveal protocol and the session loop around it.

mod input;
mod round;
mod session;
mod types;

pub use input::{InputError, LineInput, MoveCommand, MoveInput, ScriptedInput, HELP_COMMAND};
pub use round::{CommittedRound, ResolvedRound};
pub use session::{GameSession, SessionState};
pub use types::SessionSummary;
