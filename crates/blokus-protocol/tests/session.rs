//! End-to-end transcripts through the client loop with in-memory I/O.

use std::io::Cursor;

use blokus_core::{Move, Player, is_legal};
use blokus_protocol::{Message, SearchConfig, Session, run};

fn session() -> Session {
    Session::new(SearchConfig {
        time_budget_secs: 0.1,
        max_depth: 3,
    })
}

fn transcript(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    run(&mut session(), Cursor::new(input), &mut out).expect("in-memory I/O cannot fail");
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn empty_grid(n: usize) -> String {
    let column = vec!["-1"; n].join(",");
    let columns = vec![format!("[{column}]"); n].join(",");
    format!("[{columns}]")
}

fn snapshot(n: usize, turn: u8, wants_move: bool) -> String {
    let pieces = r#"[[{"x":0,"y":0}],[{"x":0,"y":0},{"x":1,"y":0}],[{"x":0,"y":0},{"x":1,"y":0},{"x":1,"y":1}]]"#;
    let blocks = vec![pieces; 4].join(",");
    format!(
        r#"{{"board":{{"dimension":{n},"grid":{grid},"bonus_squares":[[2,2]]}},"turn":{turn},"allBlocks":[{blocks}]{mv}}}"#,
        grid = empty_grid(n),
        mv = if wants_move { r#","move":1"# } else { "" },
    )
}

#[test]
fn setup_then_move_request_emits_one_legal_move() {
    let input = format!(
        "{{\"number\": 1}}\n{}\n{}\n",
        snapshot(6, 1, false),
        snapshot(6, 1, true)
    );
    let lines = transcript(&input);
    assert_eq!(lines.len(), 1, "unexpected output: {lines:?}");

    let mv: Move = lines[0].parse().expect("reply is a move line");
    let board = Message::parse(&snapshot(6, 1, true))
        .unwrap()
        .to_board()
        .unwrap()
        .unwrap();
    assert!(is_legal(&board, mv, Player::ALL[1]));
}

#[test]
fn malformed_lines_produce_diagnostics_and_loop_continues() {
    let input = format!("garbage\n\n{{\"error\":\"timeout\"}}\n{}\n", snapshot(5, 0, true));
    let lines = transcript(&input);
    assert_eq!(lines.len(), 3, "unexpected output: {lines:?}");
    assert!(lines[0].starts_with("DEBUG Error: malformed message"));
    assert_eq!(lines[1], "DEBUG Error: timeout");
    assert!(lines[2].parse::<Move>().is_ok(), "last line should be a move: {}", lines[2]);
}

#[test]
fn state_without_move_request_is_silent() {
    let input = format!("{}\n{}\n", snapshot(5, 0, false), snapshot(5, 2, false));
    assert!(transcript(&input).is_empty());
}

#[test]
fn empty_input_ends_cleanly() {
    assert!(transcript("").is_empty());
}
