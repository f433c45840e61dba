//! Integration tests for the play command

use tempfile::TempDir;

use crate::helpers::{fixture_path, run_oscrec};

fn play(path: &std::path::Path) -> (String, String, i32) {
    run_oscrec(&["play", "5000", path.to_str().unwrap()])
}

#[test]
fn play_prints_records_in_order() {
    let (stdout, _stderr, exit_code) = play(&fixture_path("sample.xml"));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "/x : 0 : 1\n/x : 5 : 2\n");
}

#[test]
fn play_prints_missing_attribute_as_empty() {
    let (stdout, _stderr, exit_code) = play(&fixture_path("missing_value.xml"));

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["/a : 10 : 1", "/b : 20 : ", "/c : 30 : 3"]);
}

#[test]
fn play_malformed_file_prints_partial_output_and_exits_1() {
    let (stdout, stderr, exit_code) = play(&fixture_path("malformed.xml"));

    assert_eq!(exit_code, 1);
    assert_eq!(stdout, "/a : 10 : 1\n/b : 20 : 2\n");
    assert!(stderr.contains("stopped after 2 message(s)"));
}

#[test]
fn play_nonexistent_file_exits_1_without_output() {
    let (stdout, stderr, exit_code) = run_oscrec(&["play", "5000", "nonexistent.xml"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("File not found"));
    assert!(stderr.contains("nonexistent.xml"));
}

#[test]
fn play_directory_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = play(temp_dir.path());

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Not a regular file"));
}

#[test]
fn play_ignores_port_value() {
    let path = fixture_path("sample.xml");
    let (stdout, _stderr, exit_code) = run_oscrec(&["play", "1", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 2);
}
