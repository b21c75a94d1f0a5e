//! CLI Interface E2E Tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the rpnc binary
fn rpnc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rpnc"))
}

/// A command isolated from the caller's configuration and environment.
fn rpnc(work_dir: &TempDir) -> Command {
    let mut cmd = Command::new(rpnc_bin());
    cmd.current_dir(work_dir.path())
        .env_remove("RPNC_CONFIG")
        .env_remove("RPNC_LOG")
        .env_remove("RPNC_VERBOSE")
        .env("XDG_CONFIG_HOME", work_dir.path().join("xdg"))
        .env("HOME", work_dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--emit")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_statement_arguments() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .args(["24a", "(23)(24)", "log(2, 1)"])
        .assert()
        .success()
        .stdout("24 a *\n23 24 *\nlog 2 put_arg 1 put_arg invoke\n");
}

#[test]
fn test_cli_hyphen_statement_after_separator() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .args(["--", "--10"])
        .assert()
        .success()
        .stdout("10 u- u-\n");
}

#[test]
fn test_cli_stdin() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .write_stdin("a= \t10-5\n /help  \n\n2^3^9\n")
        .assert()
        .success()
        .stdout("a 10 5 - =\nhelp\n\n2 3 9 ^ ^\n");
}

#[test]
fn test_cli_invalid_utf8_line_is_reported_and_skipped() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .write_stdin(&b"1+1\n\xff\n2*3\n"[..])
        .assert()
        .failure()
        .code(1)
        .stdout("1 1 +\n2 3 *\n")
        .stderr(predicate::str::contains(" --> 2:1"));
}

#[test]
fn test_cli_statement_with_embedded_newline() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .arg("1\n*@")
        .assert()
        .failure()
        .code(1)
        .stdout("1\n")
        .stderr(predicate::str::contains("error: expected expression or command, got '*'"));
}

#[test]
fn test_cli_error_reports_and_continues() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .write_stdin("1 + 2\n/go*1\n2!!%\n")
        .assert()
        .failure()
        .code(1)
        .stdout("1 2 +\n2 ! ! %\n")
        .stderr(
            predicate::str::contains("error: expected end of line, got '*'")
                .and(predicate::str::contains(" --> 2:4"))
                .and(predicate::str::contains("2 | /go*1")),
        );
}

#[test]
fn test_cli_lexical_error() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .arg("1 + .x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: illegal character '.'"));
}

#[test]
fn test_cli_file_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("statements.txt");
    std::fs::write(&input, "x = 2y\nf()\n").unwrap();

    rpnc(&dir)
        .arg("--file")
        .arg(&input)
        .assert()
        .success()
        .stdout("x 2 y * =\nf invoke\n");
}

#[test]
fn test_cli_missing_file() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .args(["--file", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_cli_emit_tokens() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .args(["--emit", "tokens", "2x"])
        .assert()
        .success()
        .stdout("Integer '2' Operator '*' Identifier 'x' EndOfInput ''\n");
}

#[test]
fn test_cli_tab_width() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .args(["--tab-width", "8", "\t)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(" --> 1:9"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .args(["--verbose", "--no-color", "1+1"])
        .assert()
        .success()
        .stdout("1 1 +\n")
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_cli_quiet_by_default() {
    let dir = TempDir::new().unwrap();
    rpnc(&dir)
        .arg("1+1")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
