//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// `notes` with no ambient database or config leaking in from the host
fn notes(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notes").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("NOTES_CONFIG")
        .env_remove("NOTES_BIND");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();

    notes(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let home = tempfile::tempdir().unwrap();

    notes(&home)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();

    notes(&home)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempfile::tempdir().unwrap();

    notes(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();

    notes(&home)
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes"));
}
