//! End-to-end CLI contract tests.
//!
//! Startup failures must print a diagnostic to stderr and exit with
//! code 1, without any terminal interaction.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn gifplay() -> Command {
    Command::cargo_bin("gifplay").unwrap()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    gifplay()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_prints_usage_to_stderr_and_exits_1() {
    gifplay()
        .arg("-h")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_reports_open_error() {
    gifplay()
        .arg("no-such-animation.gif")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn garbage_input_reports_decode_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not a gif").unwrap();

    gifplay()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("decode"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    gifplay()
        .args(["-z", "whatever.gif"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}
