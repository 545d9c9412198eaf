//! Tests for the highlight session and the interactive loop

use std::io::Cursor;

use randtree::application::{ApplicationError, Session, TreeSnapshot};
use randtree::cli::repl::run_session;
use randtree::domain::{DomainError, ScriptedPicker, TreeBuilder};

fn session() -> Session {
    Session::new(TreeBuilder::with_picker(ScriptedPicker::default()), ',')
}

fn run(script: &str) -> String {
    let mut session = session();
    let mut out = Vec::new();
    run_session(&mut session, Cursor::new(script), &mut out, false).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================
// Session Tests
// ============================================================

#[test]
fn given_selection_when_selecting_child_then_path_and_edges_match() {
    // Arrange
    let mut session = session();
    session.submit("5,3,8").unwrap();
    let root = session.tree().root().unwrap();

    // Act
    let highlight = session.select_position(2).unwrap();

    // Assert
    assert_eq!(highlight.path, vec![root, highlight.selected]);
    assert_eq!(highlight.edges, vec![(root, highlight.selected)]);
    assert_eq!(highlight.previous, None);
}

#[test]
fn given_out_of_range_position_when_selecting_then_errors_and_keeps_highlight() {
    let mut session = session();
    session.submit("5,3").unwrap();
    let highlight = session.select_position(1).unwrap();

    let result = session.select_position(9);

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::PositionOutOfRange {
            position: 9,
            len: 2
        }))
    ));
    assert_eq!(session.highlighted(), Some(highlight.selected));
}

#[test]
fn given_highlight_when_taking_snapshot_then_includes_path_positions() {
    let mut session = session();
    session.submit("5,3,8,1").unwrap();
    session.select_position(3).unwrap();

    let snapshot = session.snapshot();

    let highlight = snapshot.highlight.as_ref().unwrap();
    assert_eq!(highlight.selected, 3);
    assert_eq!(highlight.path, vec![0, 1, 3]);
    let json = snapshot.to_json().unwrap();
    assert_eq!(TreeSnapshot::from_json(&json).unwrap(), snapshot);
}

#[test]
fn given_session_when_clearing_then_tree_and_highlight_are_gone() {
    let mut session = session();
    session.submit("1,2,3").unwrap();
    session.select_position(2).unwrap();

    session.clear();

    assert!(session.tree().is_empty());
    assert_eq!(session.highlighted(), None);
    assert_eq!(session.snapshot(), TreeSnapshot::default());
}

// ============================================================
// Interactive Loop Tests
// ============================================================

#[test]
fn given_build_and_select_when_running_session_then_prints_highlighted_path() {
    let output = run("build 5,3,8,1\nselect 3\nquit\n");

    assert!(output.contains("built 4 nodes"));
    assert!(output.contains("path: 5 -> 3 -> 1"));
    assert!(output.contains("L: 1 <-"));
}

#[test]
fn given_second_selection_when_running_session_then_reports_unselected_node() {
    let output = run("build 5,3,8\nselect 1\nselect 2\n");

    assert!(output.contains("unselected 3"));
    assert!(output.contains("path: 5 -> 8"));
}

#[test]
fn given_empty_build_when_running_session_then_reports_and_continues() {
    let output = run("build\nbuild 42\nshow\n");

    assert!(output.contains("error: Enter some value"));
    assert!(output.contains("built 1 nodes"));
}

#[test]
fn given_unknown_command_when_running_session_then_reports_usage() {
    let output = run("dance\nhelp\n");

    assert!(output.contains("error: unknown command: dance"));
    assert!(output.contains("select <position>"));
}

#[test]
fn given_clear_when_running_session_then_show_prints_empty_tree() {
    let output = run("build 1,2\nclear\nshow\nreset\n");

    assert!(output.contains("tree cleared"));
    assert!(output.contains("(empty tree)"));
    assert!(output.contains("nothing selected"));
}

#[test]
fn given_json_command_when_running_session_then_prints_snapshot() {
    let output = run("build 5,x\njson\n");

    assert!(output.contains("\"value\": \"x\""));
    assert!(output.contains("\"numeric\": false"));
}

#[test]
fn given_padded_values_when_running_session_then_keeps_leading_whitespace() {
    let output = run("build  5,3\njson\n");

    assert!(output.contains("\"value\": \" 5\""));
    assert!(output.contains("\"value\": \"3\""));
}
