//! End-to-end tests for the command-line interface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command pointed at a throwaway data dir and a closed server port
fn offline_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ranktrack").unwrap();
    cmd.env("RANKTRACK_DATA_DIR", temp.path())
        .env("RANKTRACK_SERVER_URL", "http://127.0.0.1:9");
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("ranktrack")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("section"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn bare_invocation_prints_hint() {
    let temp = TempDir::new().unwrap();
    offline_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'ranktrack --help'"));
}

#[test]
fn config_honors_data_dir_override() {
    let temp = TempDir::new().unwrap();
    offline_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(temp.path().to_str().unwrap()));
}

#[test]
fn section_delete_refuses_default_without_a_server() {
    let temp = TempDir::new().unwrap();
    offline_cmd(&temp)
        .args(["section", "delete", "Default", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot delete the Default section."));
}

#[test]
fn account_list_fails_when_server_is_unreachable() {
    let temp = TempDir::new().unwrap();
    offline_cmd(&temp)
        .args(["account", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));
}

#[test]
fn account_save_validates_before_sending() {
    let temp = TempDir::new().unwrap();
    offline_cmd(&temp)
        .args(["account", "save", "  ", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("In-game name cannot be empty"));
}
