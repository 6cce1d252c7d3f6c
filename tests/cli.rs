//! Tests for the gmake binary

mod common;

use assert_cmd::Command;
use common::create_test_script;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gmake() -> Command {
    let mut cmd = Command::cargo_bin("gmake").unwrap();
    cmd.env_remove("OS").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_runs_top_level_then_task() {
    let (temp_dir, _) = create_test_script(
        "$NAME=world\nPRINT =\"start\"\ntask hello:\n$echo hello $NAME\n",
    );

    gmake()
        .current_dir(temp_dir.path())
        .arg("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("hello world"))
        .stdout(predicate::str::contains("Set variable: NAME = world"))
        .stdout(predicate::str::contains("Running task: hello"));
}

#[test]
fn test_stop_exits_zero_and_skips_remaining_tasks() {
    let (temp_dir, _) = create_test_script(
        "task first:\nPRINT =\"in first\"\nSTOP\nPRINT =\"after stop\"\ntask second:\nPRINT =\"in second\"\n",
    );

    gmake()
        .current_dir(temp_dir.path())
        .args(["first", "second"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("in first"))
        .stdout(predicate::str::contains("after stop").not())
        .stdout(predicate::str::contains("in second").not())
        .stdout(predicate::str::contains("Execution stopped."));
}

#[test]
fn test_unknown_top_level_line_is_reported() {
    let (temp_dir, _) = create_test_script("foo bar\nPRINT =\"next\"\n");

    gmake()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: foo bar"))
        .stdout(predicate::str::contains("next"));
}

#[test]
fn test_status_lines_go_to_stdout() {
    let (temp_dir, _) = create_test_script("foo bar\nOUT: ./nope\n");

    gmake()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: foo bar"))
        .stdout(predicate::str::contains("Output file not found: ./nope"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_task_is_not_fatal() {
    let (temp_dir, _) = create_test_script("task build:\nPRINT =\"built\"\n");

    gmake()
        .current_dir(temp_dir.path())
        .args(["deploy", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 'deploy' not found."))
        .stdout(predicate::str::contains("built"));
}

#[test]
fn test_failing_command_still_exits_zero() {
    let (temp_dir, _) = create_test_script("task t:\nexit 7\nPRINT =\"after\"\n");

    gmake()
        .current_dir(temp_dir.path())
        .arg("t")
        .assert()
        .success()
        .stdout(predicate::str::contains("exit code Some(7)"))
        .stdout(predicate::str::contains("after"));
}

#[test]
fn test_list_tasks_without_running() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join("ran");
    let script = format!(
        "$touch {}\ntask test:\ntask build:\n",
        marker.display()
    );
    fs::write(temp_dir.path().join("gMake"), script).unwrap();

    gmake()
        .current_dir(temp_dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout("build\ntest\n");

    assert!(!marker.exists());
}

#[test]
fn test_explicit_file_and_define() {
    let temp_dir = TempDir::new().unwrap();
    let script_path = temp_dir.path().join("release.gmake");
    fs::write(&script_path, "task show:\necho mode-$MODE\n").unwrap();

    gmake()
        .arg("-f")
        .arg(&script_path)
        .args(["-D", "MODE=release", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode-release"));
}

#[test]
fn test_settings_file_seeds_variables() {
    let (temp_dir, _) = create_test_script("task show:\n$echo $GREETING\n");
    fs::write(
        temp_dir.path().join("gmake.yml"),
        "vars:\n  GREETING: from-settings\n",
    )
    .unwrap();

    gmake()
        .current_dir(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-settings"));
}

#[test]
fn test_env_file_is_loaded() {
    let (temp_dir, _) = create_test_script("task env:\necho $GMAKE_FROM_DOTENV\n");
    fs::write(temp_dir.path().join(".env"), "GMAKE_FROM_DOTENV=dotenv-value\n").unwrap();

    gmake()
        .current_dir(temp_dir.path())
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("dotenv-value"));
}

#[test]
fn test_quiet_hides_info() {
    let (temp_dir, _) = create_test_script("$A=1\ntask t:\nPRINT =\"text\"\n");

    gmake()
        .current_dir(temp_dir.path())
        .args(["-q", "t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("Set variable").not());
}

#[test]
fn test_missing_script_fails() {
    let temp_dir = TempDir::new().unwrap();

    gmake()
        .arg("-f")
        .arg(temp_dir.path().join("absent"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn test_completions() {
    gmake()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gmake"));
}
