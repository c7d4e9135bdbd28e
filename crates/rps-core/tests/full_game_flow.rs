//! Integration tests for the full game flow.
//!
//! These tests drive complete sessions through scripted input and an
//! in-memory console, then check the transcript the way a player would.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rps_core::{
    crypto::{HmacSha256, OsKeySource},
    protocol::SessionState,
    CommitmentGenerator, CommitmentKey, ConsolePresenter, Digest, GameSession, LineInput,
    MoveSet, Outcome, OutcomeMatrix, ScriptedInput,
};
use std::io::Cursor;

/// One decided round as it appears on the console
struct Transcript {
    digest: Digest,
    human: String,
    computer: String,
    result: String,
    key: CommitmentKey,
}

fn value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)
}

/// Collect every decided round from console output
fn decided_rounds(text: &str) -> Vec<Transcript> {
    let mut rounds = Vec::new();
    let mut digest = None;
    let mut human = None;
    let mut computer = None;
    let mut result = None;

    for line in text.lines() {
        // The prompt has no newline, so echoes share its line
        let line = line.trim_start_matches("Enter your move: ");
        if let Some(hex) = value(line, "HMAC: ") {
            digest = Some(hex.parse::<Digest>().unwrap());
        } else if let Some(name) = value(line, "Your move: ") {
            human = Some(name.to_string());
        } else if let Some(name) = value(line, "Computer move: ") {
            computer = Some(name.to_string());
        } else if ["You win!", "You lose!", "It's a draw!"].contains(&line) {
            result = Some(line.to_string());
        } else if let Some(hex) = value(line, "HMAC key: ") {
            rounds.push(Transcript {
                digest: digest.take().unwrap(),
                human: human.take().unwrap(),
                computer: computer.take().unwrap(),
                result: result.take().unwrap(),
                key: hex.parse().unwrap(),
            });
        }
    }
    rounds
}

fn result_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
        Outcome::Draw => "It's a draw!",
    }
}

fn play(names: &[&str], script: &[&str], seed: u64) -> String {
    let moves = MoveSet::new(names).unwrap();
    let mut session = GameSession::with_capabilities(
        moves,
        CommitmentGenerator::new(),
        StdRng::seed_from_u64(seed),
        ScriptedInput::new(script.iter().copied()),
        ConsolePresenter::new(Vec::new()),
    );
    session.run().unwrap();
    String::from_utf8(session.presenter().get_ref().clone()).unwrap()
}

/// Every revealed key opens the digest published for that round
#[test]
fn test_revealed_keys_verify_published_digests() {
    let names = ["rock", "paper", "scissors", "lizard", "spock"];
    let text = play(&names, &["1", "2", "3", "4", "5", "0"], 99);
    let rounds = decided_rounds(&text);
    let generator = CommitmentGenerator::new();

    assert_eq!(rounds.len(), 5);
    for round in &rounds {
        assert!(generator
            .verify(&round.digest, &round.key, &round.computer)
            .unwrap());
        for other in names.iter().filter(|n| **n != round.computer) {
            assert!(!generator.verify(&round.digest, &round.key, other).unwrap());
        }
    }
}

/// Results on the console agree with the outcome matrix
#[test]
fn test_results_follow_outcome_matrix() {
    let names = ["rock", "paper", "scissors"];
    let moves = MoveSet::new(names).unwrap();
    let matrix = OutcomeMatrix::new(&moves);
    let text = play(&names, &["1", "1", "2", "3", "3", "2", "0"], 7);

    let rounds = decided_rounds(&text);
    assert_eq!(rounds.len(), 6);
    for round in rounds {
        let human = moves.position(&round.human).unwrap();
        let computer = moves.position(&round.computer).unwrap();
        assert_eq!(round.result, result_line(matrix.outcome(human, computer)));
    }
}

/// The computer's move comes from the injected generator
#[test]
fn test_computer_move_drawn_from_rng() {
    let names = ["a", "b", "c", "d", "e", "f", "g"];
    let seed = 1234;
    let mut rng = StdRng::seed_from_u64(seed);
    let expected: Vec<&str> = (0..3).map(|_| names[rng.gen_range(0..names.len())]).collect();

    let text = play(&names, &["1", "1", "1", "0"], seed);
    let drawn: Vec<String> = decided_rounds(&text)
        .into_iter()
        .map(|r| r.computer)
        .collect();

    assert_eq!(drawn, expected);
}

/// Keys are fresh every round
#[test]
fn test_keys_never_repeat_across_rounds() {
    let script: Vec<&str> = std::iter::repeat("2").take(50).chain(["0"]).collect();
    let text = play(&["x", "y", "z"], &script, 5);
    let mut keys: Vec<String> = decided_rounds(&text)
        .iter()
        .map(|r| r.key.to_hex())
        .collect();

    assert_eq!(keys.len(), 50);
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 50);
}

/// Exact console layout of a decided round followed by exit
#[test]
fn test_console_layout() {
    let text = play(&["rock", "paper", "scissors"], &["2", "0"], 3);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("HMAC: "));
    assert_eq!(lines[0].len(), "HMAC: ".len() + 64);
    assert_eq!(
        &lines[1..6],
        ["Available moves:", "1 - rock", "2 - paper", "3 - scissors", "0 - exit"]
    );
    assert_eq!(lines[6], "? - help");
    assert_eq!(lines[7], "Enter your move: Your move: paper");
    assert!(lines[8].starts_with("Computer move: "));
    assert!(["You win!", "You lose!", "It's a draw!"].contains(&lines[9]));
    assert!(lines[10].starts_with("HMAC key: "));
    assert_eq!(lines[11], "");
    assert!(lines[12].starts_with("HMAC: "));
    assert_eq!(lines.last(), Some(&"Enter your move: You exited the game"));
}

/// Help, bad input and a real move in one session over a line reader
#[test]
fn test_help_then_retry_then_play_over_line_input() {
    let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
    let mut session = GameSession::with_capabilities(
        moves,
        CommitmentGenerator::new(),
        StdRng::seed_from_u64(8),
        LineInput::new(Cursor::new("?\n\nfoo\n3\n")),
        ConsolePresenter::new(Vec::new()),
    );

    let summary = session.run().unwrap();
    let text = String::from_utf8(session.presenter().get_ref().clone()).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(text.matches("Error: Invalid move").count(), 2);
    // One abandoned round for help, one played, one cut short by end of input
    assert_eq!(text.matches("HMAC: ").count(), 3);
    assert_eq!(text.matches("HMAC key: ").count(), 1);
    assert!(text.contains("| ROCK       | Draw | Lose  | Win      |"));
}

/// Stepping by hand never exposes a key before the human has moved
#[test]
fn test_manual_stepping_keeps_commit_before_reveal() {
    let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
    let mut session = GameSession::with_capabilities(
        moves,
        CommitmentGenerator::with_capabilities(HmacSha256, OsKeySource),
        StdRng::seed_from_u64(21),
        ScriptedInput::new(["1"]),
        ConsolePresenter::new(Vec::new()),
    );

    let committed = session.step(SessionState::Start).unwrap();
    let SessionState::Committed(round) = committed else {
        panic!("expected a committed round");
    };
    let published = round.digest().clone();

    let state = session.step(SessionState::Committed(round)).unwrap();
    let SessionState::Resolved(resolved) = session.step(state).unwrap() else {
        panic!("expected a resolved round");
    };

    assert_eq!(resolved.digest(), &published);
    let computer = session.moves().name(resolved.computer()).unwrap();
    assert!(CommitmentGenerator::new()
        .verify(&published, resolved.key(), computer)
        .unwrap());
}
