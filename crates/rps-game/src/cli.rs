//! Command-line interface for rps-game.

use clap::Parser;

/// Rock-paper-scissors over any odd number of moves, with the computer's
/// move committed by HMAC before you choose
#[derive(Parser, Debug)]
#[command(name = "rps-game")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tracing filter for stderr logs (overrides RPS_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Moves in circular order; each loses to the next half of the list
    #[arg(
        value_name = "MOVES",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub moves: Vec<String>,
}
