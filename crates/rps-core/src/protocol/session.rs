//! The game session: an explicit state machine run in a loop.

use super::{CommittedRound, InputError, MoveCommand, MoveInput, ResolvedRound, SessionSummary};
use crate::crypto::{CommitmentGenerator, HmacSha256, KeySource, MacProvider, OsKeySource};
use crate::error::GameError;
use crate::games::{MoveSet, OutcomeMatrix, RulesTable};
use crate::presentation::Presenter;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use tracing::{debug, info, warn};

/// Where the session is between two steps
#[derive(Debug)]
pub enum SessionState {
    /// Nothing committed yet for the next round
    Start,
    /// Computer move sealed and digest published
    Committed(CommittedRound),
    /// Menu shown, waiting on the human
    AwaitingMove(CommittedRound),
    /// Last input was rejected
    Retrying(CommittedRound, InputError),
    /// Rules requested; the pending round is abandoned unrevealed
    HelpRequested,
    Resolved(ResolvedRound),
    Exiting,
}

/// One player against the computer over a fixed move set
///
/// The computer's move is drawn from `rng` and sealed before the human
/// is prompted; the key is shown only once the round is resolved.
pub struct GameSession<I, P, R = OsRng, M = HmacSha256, K = OsKeySource> {
    moves: MoveSet,
    matrix: OutcomeMatrix,
    rules: RulesTable,
    generator: CommitmentGenerator<M, K>,
    rng: R,
    input: I,
    presenter: P,
    rounds_committed: u64,
    summary: SessionSummary,
}

impl<I: MoveInput, P: Presenter> GameSession<I, P> {
    /// Session with OS randomness and HMAC-SHA256
    pub fn new(moves: MoveSet, input: I, presenter: P) -> Self {
        Self::with_capabilities(moves, CommitmentGenerator::new(), OsRng, input, presenter)
    }
}

impl<I, P, R, M, K> GameSession<I, P, R, M, K>
where
    I: MoveInput,
    P: Presenter,
    R: RngCore + CryptoRng,
    M: MacProvider,
    K: KeySource,
{
    /// Create with explicit commitment and randomness capabilities
    pub fn with_capabilities(
        moves: MoveSet,
        generator: CommitmentGenerator<M, K>,
        rng: R,
        input: I,
        presenter: P,
    ) -> Self {
        let matrix = OutcomeMatrix::new(&moves);
        let rules = matrix.rules_table(&moves);
        Self {
            moves,
            matrix,
            rules,
            generator,
            rng,
            input,
            presenter,
            rounds_committed: 0,
            summary: SessionSummary::default(),
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Tally of decided rounds so far
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Play rounds until the human exits or input ends
    pub fn run(&mut self) -> Result<SessionSummary, GameError> {
        let mut state = SessionState::Start;
        loop {
            state = match state {
                SessionState::Exiting => {
                    self.presenter.exit()?;
                    info!(summary = %self.summary, "session finished");
                    return Ok(self.summary);
                }
                other => self.step(other)?,
            };
        }
    }

    /// Advance by one transition
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, GameError> {
        match state {
            SessionState::Start => {
                let round = self.commit_round()?;
                self.presenter.commitment(round.digest())?;
                Ok(SessionState::Committed(round))
            }
            SessionState::Committed(round) => {
                self.presenter.menu(&self.moves)?;
                Ok(SessionState::AwaitingMove(round))
            }
            SessionState::AwaitingMove(round) => self.await_move(round),
            SessionState::Retrying(round, error) => {
                warn!(round = round.number(), %error, "rejected move input");
                self.presenter.invalid_input(&error)?;
                self.presenter.menu(&self.moves)?;
                Ok(SessionState::AwaitingMove(round))
            }
            SessionState::HelpRequested => {
                info!("rules requested, restarting with a fresh commitment");
                self.presenter.help(&self.rules)?;
                Ok(SessionState::Start)
            }
            SessionState::Resolved(round) => {
                self.finish_round(&round)?;
                Ok(SessionState::Start)
            }
            SessionState::Exiting => Ok(SessionState::Exiting),
        }
    }

    fn commit_round(&mut self) -> Result<CommittedRound, GameError> {
        let computer = self.rng.gen_range(0..self.moves.len());
        let commitment = self.generator.seal(&self.moves.names()[computer])?;
        self.rounds_committed += 1;
        debug!(
            round = self.rounds_committed,
            digest = %commitment.digest(),
            "computer move committed"
        );
        Ok(CommittedRound::new(
            self.rounds_committed,
            computer,
            commitment,
        ))
    }

    fn await_move(&mut self, round: CommittedRound) -> Result<SessionState, GameError> {
        self.presenter.prompt()?;
        let Some(line) = self.input.next_line()? else {
            debug!(round = round.number(), "end of input");
            return Ok(SessionState::Exiting);
        };
        match MoveCommand::parse(&line, &self.moves) {
            Ok(MoveCommand::Play(human)) => {
                self.presenter.human_move(&self.moves.names()[human])?;
                Ok(SessionState::Resolved(round.resolve(&self.matrix, human)))
            }
            Ok(MoveCommand::Exit) => Ok(SessionState::Exiting),
            Ok(MoveCommand::Help) => Ok(SessionState::HelpRequested),
            Err(error) => Ok(SessionState::Retrying(round, error)),
        }
    }

    fn finish_round(&mut self, round: &ResolvedRound) -> Result<(), GameError> {
        self.presenter
            .computer_move(&self.moves.names()[round.computer()])?;
        self.presenter.outcome(round.outcome())?;
        self.presenter.reveal(round.key())?;
        self.summary.record(round.outcome());
        info!(
            round = round.number(),
            outcome = %round.outcome(),
            "round resolved"
        );
        Ok(())
    }
}
