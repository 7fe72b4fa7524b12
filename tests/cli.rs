//! End-to-end runs of the misra-summary binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_report(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("misra.txt");
    std::fs::write(&path, content).unwrap();
    path
}

fn run(report: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_misra-summary"))
        .args(extra)
        .arg(report)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_plain(report: &Path) -> Output {
    run(report, &["--no-color", "--no-config"])
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn empty_report_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(&dir, "");

    let output = run_plain(&report);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Static analysis for MISRA compliance complete. No errors found.\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn violations_exit_127_and_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(&dir, "foo.c:10:21.1\nfoo.c:10:21.1\nbar.c:5:8.2\n");

    let output = run_plain(&report);
    assert_eq!(output.status.code(), Some(127));

    let stdout = stdout_of(&output);
    let violations: Vec<&str> = stdout.lines().filter(|l| l.starts_with("File ")).collect();
    assert_eq!(violations.len(), 2);
    assert!(violations[0].starts_with("File foo.c"));
    assert!(violations[0].contains("violates rule #21.1 of the MISRA C 2012 standard"));
    assert!(violations[0].ends_with("at line 10"));
    assert!(violations[1].starts_with("File bar.c"));
    assert!(violations[1].ends_with("at line 5"));

    assert!(stdout.contains("Static analysis results: Error Summary"));
    assert!(stdout.trim_end().ends_with(&"=".repeat(49)));
}

#[test]
fn same_line_different_rules_are_both_printed() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(&dir, "foo.c:10:21.1\nfoo.c:10:8.2\n");

    let output = run_plain(&report);
    assert_eq!(output.status.code(), Some(127));
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("File ")).count(), 2);
}

#[test]
fn malformed_line_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(&dir, "foo.c:10:21.1\nfoo.c:10\n");

    let output = run_plain(&report);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed report line 2"));
}

#[test]
fn missing_report_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_plain(&dir.path().join("absent.txt"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read report"));
}

#[test]
fn config_file_sets_column_width_and_color() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".misra-summary.toml"),
        "[output]\ncolor = false\ncolumn_width = 20\n",
    )
    .unwrap();
    let report = write_report(&dir, "foo.c:10:21.1\n");

    let output = run(&report, &[]);
    assert_eq!(output.status.code(), Some(127));
    let stdout = stdout_of(&output);
    assert!(!stdout.contains('\u{1b}'));
    let expected = format!("{:<20} violates rule #21.1", "File foo.c");
    assert!(stdout.contains(&expected));
}

#[test]
fn colored_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(&dir, "foo.c:10:21.1\n");

    let output = Command::new(env!("CARGO_BIN_EXE_misra-summary"))
        .arg("--no-config")
        .arg(&report)
        .env_remove("NO_COLOR")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(127));
    assert!(stdout_of(&output).contains('\u{1b}'));
}
