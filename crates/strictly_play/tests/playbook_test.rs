//! Tests for TOML playbook loading.

use std::io::Write;
use strictly_play::{Playbook, run_playbook};
use strictly_tictactoe::{Mark, Move, Position, RulesErrorKind};

const WINNING_PLAYBOOK: &str = r#"
name = "top row"

[[moves]]
mark = "X"
at = { x = 0, y = 0 }

[[moves]]
mark = "O"
auto = { seed = 4 }

[[moves]]
mark = "X"
at = { x = 1, y = 0 }

[[moves]]
mark = "O"
at = { x = 0, y = 2 }

[[moves]]
mark = "X"
at = { x = 2, y = 0 }
"#;

#[test]
fn test_parse_playbook() {
    let playbook = Playbook::parse(WINNING_PLAYBOOK).unwrap();
    assert_eq!(playbook.name().as_deref(), Some("top row"));
    assert_eq!(playbook.moves().len(), 5);
    assert_eq!(playbook.moves()[0], Move::explicit(Mark::X, Position::new(0, 0)));
    assert_eq!(playbook.moves()[1], Move::auto(Mark::O, 4));
}

#[test]
fn test_run_winning_playbook() {
    let playbook = Playbook::parse(WINNING_PLAYBOOK).unwrap();
    let history = run_playbook(&playbook).unwrap();
    assert_eq!(history.current().winner().unwrap(), Mark::X);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WINNING_PLAYBOOK.as_bytes()).unwrap();

    let playbook = Playbook::from_file(file.path()).unwrap();
    assert_eq!(playbook, Playbook::parse(WINNING_PLAYBOOK).unwrap());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Playbook::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read playbook file"));
}

#[test]
fn test_entry_needs_exactly_one_target() {
    let both = r#"
[[moves]]
mark = "X"
auto = { seed = 1 }
at = { x = 1, y = 1 }
"#;
    let err = Playbook::parse(both).unwrap_err();
    assert!(err.message.contains("both"));

    let neither = r#"
[[moves]]
mark = "O"
"#;
    let err = Playbook::parse(neither).unwrap_err();
    assert!(err.message.contains("either"));
}

#[test]
fn test_config_error_records_location() {
    let err = Playbook::parse("[[moves]]\nmark = \"X\"\n").unwrap_err();
    assert!(err.file.ends_with("playbook.rs"), "file was {}", err.file);
    assert!(err.line > 0);
    assert!(err.to_string().contains(&format!("{}:{}", err.file, err.line)));
}

#[test]
fn test_unknown_mark_rejected() {
    let bad = r#"
[[moves]]
mark = "Z"
at = { x = 1, y = 1 }
"#;
    let err = Playbook::parse(bad).unwrap_err();
    assert!(err.message.contains("Failed to parse playbook"));
}

#[test]
fn test_empty_playbook_leaves_fresh_game() {
    let playbook = Playbook::parse("name = \"nothing\"").unwrap();
    let history = run_playbook(&playbook).unwrap();
    assert!(history.is_empty());
    assert!(!history.current().has_winner());
}

#[test]
fn test_illegal_playbook_surfaces_rules_error() {
    let clash = r#"
[[moves]]
mark = "X"
auto = { seed = 0 }

[[moves]]
mark = "O"
at = { x = 1, y = 1 }
"#;
    let playbook = Playbook::parse(clash).unwrap();
    let err = run_playbook(&playbook).unwrap_err();
    assert_eq!(err.kind(), RulesErrorKind::CellOccupied(Position::CENTER));
}
