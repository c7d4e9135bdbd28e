//! Round verifier
//!
//! Checks that a revealed HMAC key and the computer's move reproduce the
//! HMAC published before the round.
//!
//! Usage: `rps-verify --key <KEY> --hmac <HMAC> <MOVE>`

use clap::Parser;
use rps_core::{CommitmentGenerator, CommitmentKey, CryptoError, Digest};
use serde::{Deserialize, Serialize};
use std::io;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Check a revealed key against a published HMAC
#[derive(Parser, Debug)]
#[command(name = "rps-verify")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Key printed after the round (`HMAC key: ...`)
    #[arg(long)]
    key: String,

    /// HMAC printed before the round (`HMAC: ...`)
    #[arg(long)]
    hmac: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Tracing filter for stderr logs (overrides RPS_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// The computer's move as printed
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    move_name: String,
}

/// Outcome of one verification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct VerifyReport {
    #[serde(rename = "move")]
    move_name: String,
    hmac: Digest,
    key: String,
    valid: bool,
}

fn verify(key: &str, hmac: &str, move_name: &str) -> Result<VerifyReport, CryptoError> {
    let key: CommitmentKey = key.parse()?;
    let hmac: Digest = hmac.parse()?;
    let valid = CommitmentGenerator::new().verify(&hmac, &key, move_name)?;
    debug!(%hmac, valid, "verified");
    Ok(VerifyReport {
        move_name: move_name.to_string(),
        hmac,
        key: key.to_hex(),
        valid,
    })
}

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

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let report = match verify(&cli.key, &cli.hmac, &cli.move_name) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        }
    } else if report.valid {
        println!("OK: key opens HMAC {} for move {:?}", report.hmac, report.move_name);
    } else {
        println!("MISMATCH: key does not open HMAC {} for move {:?}", report.hmac, report.move_name);
    }

    if report.valid {
        ExitCode::SUCCESS
    } else {
        warn!(move_name = %report.move_name, "commitment did not verify");
        ExitCode::FAILURE
    }
}
