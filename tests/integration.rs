//! Integration tests for the teeko engine binary.
//!
//! Drives the text protocol by spawning the engine process, sending
//! commands via stdin, and checking the stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_teeko");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start teeko");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn bestmoves(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter_map(|l| l.strip_prefix("bestmove "))
        .collect()
}

/// Red has three in the top row and drops next; D0 completes it.
const RED_TO_WIN: &str = "rrr../...../...../bbb../b....";

/// Black already holds the left column.
const BLACK_WON: &str = "b.r../b.r../b..r./b...r/.....";

#[test]
fn tei_handshake() {
    let lines = run_engine(&["tei", "quit"]);

    assert!(lines.iter().any(|l| l == "id name teeko"));
    assert!(lines.iter().any(|l| l.starts_with("id author ")));
    assert_eq!(lines.last().map(String::as_str), Some("teiok"));

    let options: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert!(!options.is_empty(), "handshake should declare options");
    for opt in &options {
        assert!(opt.contains(" type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["foobar", "position xyz", "opponent Z9", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_engine(&["", "  ", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn quit_stops_reading() {
    let lines = run_engine(&["quit", "isready"]);
    assert!(lines.is_empty());
}

#[test]
fn go_takes_the_winning_drop() {
    let lines = run_engine(&[
        "tei",
        "newgame",
        "setcolor r",
        &format!("position {}", RED_TO_WIN),
        "go",
        "d",
        "quit",
    ]);

    assert_eq!(bestmoves(&lines), vec!["D0"]);
    let info = lines.iter().find(|l| l.starts_with("info ")).expect("missing info line");
    assert!(info.contains(" nodes "), "info line: {}", info);
    assert!(lines.iter().any(|l| l == "position rrrr./...../...../bbb../b...."));
    assert!(lines.iter().any(|l| l == "winner r"));
}

#[test]
fn go_with_depth_override_and_pruning() {
    let lines = run_engine(&[
        "setoption name Pruning value true",
        "setcolor r",
        &format!("position {}", RED_TO_WIN),
        "go depth 2",
        "quit",
    ]);
    assert_eq!(bestmoves(&lines), vec!["D0"]);
}

#[test]
fn go_without_color_reports_none() {
    let lines = run_engine(&["go", "quit"]);
    assert_eq!(bestmoves(&lines), vec!["none"]);
}

#[test]
fn go_on_finished_game_reports_none() {
    let lines = run_engine(&["setcolor r", &format!("position {}", BLACK_WON), "go", "quit"]);
    assert_eq!(bestmoves(&lines), vec!["none"]);
}

#[test]
fn opening_drop_lands_in_the_center() {
    let center = ["B1", "C1", "D1", "B2", "C2", "D2", "B3", "C3", "D3"];
    for seed in 0..5 {
        let lines = run_engine(&[
            &format!("setoption name Seed value {}", seed),
            "setcolor b",
            "go",
            "quit",
        ]);
        let moves = bestmoves(&lines);
        assert_eq!(moves.len(), 1);
        assert!(center.contains(&moves[0]), "opening {} is off-center", moves[0]);
        assert!(!lines.iter().any(|l| l.starts_with("info ")), "opening should not search");
    }
}

#[test]
fn same_seed_same_opening() {
    let commands = ["setoption name Seed value 7", "setcolor r", "go", "quit"];
    assert_eq!(run_engine(&commands), run_engine(&commands));
}

#[test]
fn opponent_move_updates_the_board() {
    let lines = run_engine(&["setcolor r", "opponent C2", "d", "quit"]);
    assert!(lines.iter().any(|l| l == "2: . . b . ."));
    assert!(lines.iter().any(|l| l == "position ...../...../..b../...../....."));
}

#[test]
fn rejected_opponent_move_reports_error() {
    let lines = run_engine(&["setcolor r", "opponent C2", "opponent C2", "d", "quit"]);
    assert!(lines.iter().any(|l| l == "error destination C2 is occupied"));
    assert!(lines.iter().any(|l| l == "position ...../...../..b../...../....."));
}

#[test]
fn opponent_without_color_reports_error() {
    let lines = run_engine(&["opponent C2", "quit"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error "));
}

#[test]
fn newgame_clears_board_and_color() {
    let lines = run_engine(&[
        "setcolor r",
        &format!("position {}", RED_TO_WIN),
        "newgame",
        "go",
        "d",
        "quit",
    ]);
    assert_eq!(bestmoves(&lines), vec!["none"]);
    assert!(lines.iter().any(|l| l == "position ...../...../...../...../....."));
}

#[test]
fn engine_answers_a_sequence_of_moves() {
    let lines = run_engine(&[
        "setoption name Depth value 2",
        "setoption name Seed value 3",
        "setcolor r",
        "opponent C2",
        "go",
        "opponent A0",
        "go",
        "quit",
    ]);
    let moves = bestmoves(&lines);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.len() == 2 && *m != "none"));
    assert!(!lines.iter().any(|l| l.starts_with("error ")));
}
