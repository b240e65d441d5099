//! CLI integration tests driving the `spiral` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn spiral_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("spiral").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_total_length_once() {
    spiral_cmd()
        .assert()
        .success()
        .stdout("1565.800993487\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_is_stable_across_runs() {
    let first = spiral_cmd().output().unwrap();
    let second = spiral_cmd().output().unwrap();
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_logs_segments_to_stderr() {
    spiral_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout("1565.800993487\n")
        .stderr(predicate::str::contains("segment"))
        .stderr(predicate::str::contains("index=26"))
        .stderr(predicate::str::contains("total length 1565.800993487mm"));
}

#[test]
fn rust_log_does_not_change_stdout() {
    spiral_cmd()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("1565.800993487\n");
}

#[test]
fn unknown_argument_is_rejected() {
    spiral_cmd()
        .arg("--segments=3")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}
