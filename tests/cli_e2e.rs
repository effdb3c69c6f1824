//! End-to-end CLI tests for chatstats.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text summary of a transcript
//! - **Output formats**: JSON report, CSV side outputs
//! - **Flags**: date order, top-N, chat name, single contact
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const TRANSCRIPT: &str = "29/09/2019, 12:56 am - Messages to this group are now secured with end-to-end encryption.
29/09/2019, 12:58 am - Alice: Hey everyone 👋
29/09/2019, 1:02 am - Bob: Hi Alice!
How was the trip?
29/09/2019, 1:05 am - Alice: <Media omitted>
30/09/2019, 9:20 am - Carol: Morning! 😂😂
01/10/2019, 6:45 pm - Bob: trip trip trip";

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("WhatsApp Chat - Weekend.txt"), TRANSCRIPT).unwrap();
    fs::write(
        dir.path().join("us.txt"),
        "[1/15/24, 10:30:45 AM] Alice: Hello\n[1/16/24, 10:31:00 AM] Bob: Hi",
    )
    .unwrap();
    fs::write(dir.path().join("one_day.txt"), "01/01/2020, 10:00 - Alice: hi").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("malformed.txt"), "no header here\n").unwrap();
    fs::write(dir.path().join("invalid_utf8.txt"), [0x32, 0x39, 0xFF, 0xFE]).unwrap();

    dir
}

fn chatstats() -> Command {
    Command::cargo_bin("chatstats").unwrap()
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_text_summary() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 Weekend"))
        .stdout(predicate::str::contains("Messages:  5"))
        .stdout(predicate::str::contains("Media:     1"))
        .stdout(predicate::str::contains("trip"))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_name_flag_overrides_file_name() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .args(["--name", "Family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 Family"));
}

#[test]
fn test_default_name() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "one_day.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 WhatsApp Chat"))
        .stdout(predicate::str::contains("n/a"));
}

#[test]
fn test_empty_transcript_average() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "empty.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:  0"))
        .stdout(predicate::str::contains("Average:   n/a\n"))
        .stdout(predicate::str::contains("single day").not());
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_report() {
    let dir = setup_fixtures();

    let output = chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .args(["-f", "json", "-n", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["name"], "Weekend");
    assert_eq!(report["total_messages"], 5);
    assert_eq!(report["total_days"], 2);
    assert_eq!(report["top_words"].as_array().unwrap().len(), 2);
    assert_eq!(report["top_words"][0]["key"], "trip");
    assert_eq!(report["top_words"][0]["count"], 4);
    assert_eq!(report["top_emojis"][0]["key"], "😂");
}

#[test]
fn test_json_zero_day_average_is_null() {
    let dir = setup_fixtures();

    let output = chatstats()
        .arg(path(&dir, "one_day.txt"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["average_messages_per_day"].is_null());
    assert_eq!(report["total_days"], 0);
}

#[test]
fn test_csv_side_outputs() {
    let dir = setup_fixtures();
    let timeline = path(&dir, "timeline.csv");
    let words = path(&dir, "words.csv");

    chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .arg("--timeline-csv")
        .arg(&timeline)
        .arg("--words-csv")
        .arg(&words)
        .assert()
        .success();

    let timeline = fs::read_to_string(timeline).unwrap();
    assert_eq!(
        timeline,
        "Date;Messages\n2019-09-29;3\n2019-09-30;1\n2019-10-01;1\n"
    );

    let words = fs::read_to_string(words).unwrap();
    assert!(words.starts_with("Token;Count\ntrip;4\n"));
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_date_order_flag() {
    let dir = setup_fixtures();

    let output = chatstats()
        .arg(path(&dir, "us.txt"))
        .args(["-f", "json", "--date-order", "month-first"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["first_message"], "2024-01-15 10:30:45");
    assert_eq!(report["total_days"], 1);
}

#[test]
fn test_user_summary() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .args(["--user", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("👤 Alice"))
        .stdout(predicate::str::contains("Messages:  1"))
        .stdout(predicate::str::contains("Media:     1"));
}

#[test]
fn test_user_summary_json() {
    let dir = setup_fixtures();

    let output = chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .args(["--user", "Carol", "-f", "json"])
        .output()
        .unwrap();
    let user: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(user["contact"], "Carol");
    assert_eq!(user["favorite_emoji"]["key"], "😂");
    assert_eq!(user["favorite_emoji"]["count"], 2);
}

#[test]
fn test_log_level_writes_to_stderr() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built message sequence"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_unknown_user() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "WhatsApp Chat - Weekend.txt"))
        .args(["--user", "Mallory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mallory"));
}

#[test]
fn test_missing_file() {
    chatstats()
        .arg("/nonexistent/chat.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_malformed_transcript() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "malformed.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_invalid_utf8() {
    let dir = setup_fixtures();

    chatstats()
        .arg(path(&dir, "invalid_utf8.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn test_invalid_format() {
    chatstats()
        .args(["chat.txt", "-f", "yaml"])
        .assert()
        .failure();
}
