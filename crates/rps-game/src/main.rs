//! Rock-paper-scissors console game
//!
//! Usage: `rps-game rock paper scissors`
//!
//! Each round the computer picks a move, prints its HMAC, waits for yours,
//! then prints the key so the HMAC can be checked.

mod cli;

use clap::Parser;
use cli::Cli;
use rps_core::{ConsolePresenter, GameError, GameSession, LineInput, MoveSet, SessionSummary};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env("RPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<SessionSummary, GameError> {
    let moves = MoveSet::new(&cli.moves)?;
    info!(moves = moves.len(), "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::new(
        moves,
        LineInput::new(stdin.lock()),
        ConsolePresenter::new(stdout.lock()),
    );
    session.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(GameError::Config(e)) => {
            println!("Error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "session aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
