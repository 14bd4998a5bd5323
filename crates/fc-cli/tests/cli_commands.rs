//! Integration tests for the `fcow` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a small fortune document into a temp directory.
fn test_fortunes() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fortunes.json");
    fs::write(
        &path,
        r#"{
    "fortunes": [
        { "text": "A", "category": "life", "mood": "serious" },
        { "text": "B", "category": "code", "mood": "playful" },
        { "text": "C", "category": "Life", "mood": "encouraging" },
        "Plain old fortune"
    ]
}
"#,
    )
    .unwrap();
    (dir, path)
}

fn fcow() -> Command {
    let mut cmd = Command::cargo_bin("fcow").unwrap();
    cmd.env_remove("FCOW_FORTUNES").env_remove("FCOW_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// default draw
// ---------------------------------------------------------------------------

#[test]
fn no_args_prints_a_fortune() {
    fcow()
        .assert()
        .success()
        .stdout(predicate::str::contains("Good ").and(predicate::str::contains(".--.")));
}

#[test]
fn hour_picks_greeting() {
    fcow()
        .args(["--hour", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good morning!"));
    fcow()
        .args(["--hour", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good afternoon!"));
    fcow()
        .args(["--hour", "21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good evening!"));
}

#[test]
fn hour_out_of_range_fails() {
    fcow()
        .args(["--hour", "24"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("hour must be between 0 and 23"));
}

#[test]
fn same_seed_same_fortune() {
    let first = fcow().args(["--seed", "7", "--hour", "9"]).output().unwrap();
    let second = fcow().args(["--seed", "7", "--hour", "9"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cow_face() {
    fcow()
        .args(["--face", "cow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^__^").and(predicate::str::contains(".--.").not()));
}

#[test]
fn unknown_face_is_rejected() {
    fcow()
        .args(["--face", "moose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown face"));
}

// ---------------------------------------------------------------------------
// category filter
// ---------------------------------------------------------------------------

#[test]
fn category_filter_is_case_insensitive() {
    let (_dir, path) = test_fortunes();
    fcow()
        .args(["CODE", "-f", path.to_str().unwrap(), "--hour", "10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("< Good morning! B >")
                .and(predicate::str::contains("|O_o |")),
        );
}

#[test]
fn category_filter_only_draws_matches() {
    let (_dir, path) = test_fortunes();
    for seed in 0..10 {
        fcow()
            .args(["life", "-f", path.to_str().unwrap(), "--seed"])
            .arg(seed.to_string())
            .assert()
            .success()
            .stdout(predicate::str::contains("! B").not());
    }
}

#[test]
fn unknown_category_fails_with_choices() {
    let (_dir, path) = test_fortunes();
    fcow()
        .args(["unknown", "-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("\"unknown\"")
                .and(predicate::str::contains("life, code, Life, unspecified")),
        );
}

#[test]
fn builtin_categories_filter() {
    fcow()
        .args(["Learning", "--hour", "19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Good evening!"));
}

// ---------------------------------------------------------------------------
// --list
// ---------------------------------------------------------------------------

#[test]
fn list_builtin_categories() {
    fcow()
        .arg("--list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("- debugging")
                .and(predicate::str::contains("- growth"))
                .and(predicate::str::contains("- learning")),
        );
}

#[test]
fn list_each_category_once() {
    let (_dir, path) = test_fortunes();
    let output = fcow()
        .args(["--list", "-f", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("- life").count(), 1);
    assert_eq!(stdout.matches("- Life").count(), 1);
    assert_eq!(stdout.matches("- code").count(), 1);
    assert_eq!(stdout.matches("- unspecified").count(), 1);
}

#[test]
fn list_wins_over_count_and_category() {
    fcow()
        .args(["nothing-here", "--list", "--count"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("- growth").and(predicate::str::contains("Fortunes").not()),
        );
}

// ---------------------------------------------------------------------------
// --count
// ---------------------------------------------------------------------------

#[test]
fn count_builtin() {
    fcow()
        .arg("--count")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("growth")
                .and(predicate::str::contains("7 fortunes in 3 categories")),
        );
}

#[test]
fn count_custom_file() {
    let (_dir, path) = test_fortunes();
    fcow()
        .args(["--count", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 fortunes in 4 categories"));
}

// ---------------------------------------------------------------------------
// fortune sources
// ---------------------------------------------------------------------------

#[test]
fn env_var_selects_file() {
    let (_dir, path) = test_fortunes();
    fcow()
        .env("FCOW_FORTUNES", &path)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("- code"));
}

#[test]
fn flag_beats_env_var() {
    let (_dir, path) = test_fortunes();
    fcow()
        .env("FCOW_FORTUNES", "/does/not/exist.json")
        .args(["--list", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- code"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    fcow()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    fcow()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid fortune document"));
}

#[test]
fn empty_text_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"[{"text": ""}]"#).unwrap();
    fcow()
        .args(["--count", "-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortune #0 has no text"));
}

#[test]
fn empty_document_cannot_draw() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();
    fcow()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty list"));
}

#[test]
fn verbose_logs_to_stderr() {
    fcow()
        .args(["-v", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("selected fortune"));
}
