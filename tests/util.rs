//! Tests for terminal and filesystem helpers.

use spinlog::util::{CLEAR_SEQUENCE, clear_terminal, current_dir, is_dir, is_file};
use spinlog::{CaptureSink, Console, Stream};
use std::fs;
use tempfile::TempDir;

#[test]
fn clear_goes_to_stdout_unprefixed() {
    let sink = CaptureSink::new();
    let console = Console::builder().sink(sink.clone()).build();
    clear_terminal(&console);

    assert_eq!(sink.text(Stream::Stdout), "\x1b[1;1H\x1b[2J");
    assert_eq!(CLEAR_SEQUENCE, "\x1b[1;1H\x1b[2J");
    assert!(sink.stderr().is_empty());
}

#[test]
fn directory_and_file_predicates() {
    let tmp_dir = TempDir::new().unwrap();
    let file = tmp_dir.path().join("note.txt");
    fs::write(&file, "x").unwrap();

    assert!(is_dir(tmp_dir.path()));
    assert!(!is_file(tmp_dir.path()));
    assert!(is_file(&file));
    assert!(!is_dir(&file));

    let missing = tmp_dir.path().join("missing");
    assert!(!is_dir(&missing));
    assert!(!is_file(&missing));
}

#[test]
fn current_dir_matches_std() {
    let dir = current_dir().unwrap();
    assert_eq!(dir, std::env::current_dir().unwrap());
}
