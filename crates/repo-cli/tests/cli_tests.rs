//! CLI end-to-end tests that invoke the compiled `init-repo` binary.
//!
//! Every run gets an explicit absolute `--config` so the search never
//! reaches the binary's own directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use repo_test_utils::git::{GitSandbox, commit_messages, has_branch};
use repo_test_utils::http::{MockGitHub, created_body};
use repo_test_utils::settings::{ALIAS, USERNAME, sample_settings, write_config};
use serde_json::json;
use tempfile::TempDir;

/// The binary with a neutral environment, running inside `dir`.
fn init_repo(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_init-repo"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// The binary confined to a git sandbox, with the working copy in `work/`.
fn init_repo_in(sandbox: &GitSandbox) -> Command {
    let mut cmd = init_repo(&sandbox.work_dir());
    cmd.envs(sandbox.envs())
        .env("GIT_CEILING_DIRECTORIES", sandbox.root());
    cmd
}

fn log_contents(dir: &Path) -> String {
    fs::read_to_string(dir.join("init_repo.log")).unwrap_or_default()
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn test_help_lists_options_and_examples() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--test"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("init-repo my_new_project"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_exits_one_and_is_logged() {
    let temp = TempDir::new().unwrap();
    let full = fs::OpenOptions::new().write(true).open("/dev/full").unwrap();

    let status = std::process::Command::new(env!("CARGO_BIN_EXE_init-repo"))
        .current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdout(full)
        .stderr(std::process::Stdio::null())
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    let log = log_contents(temp.path());
    assert!(log.contains("Unhandled panic"), "{}", log);
}

// ============================================================================
// Self-check
// ============================================================================

#[test]
fn test_self_check_fails_with_placeholder_token() {
    let temp = TempDir::new().unwrap();
    let mut settings = sample_settings("http://127.0.0.1:9");
    settings.github_token = "your_github_personal_access_token_here".to_string();
    let config = write_config(temp.path(), &settings);
    // An empty PATH keeps git and ssh out of reach
    let empty_path = temp.path().join("empty-bin");
    fs::create_dir(&empty_path).unwrap();

    init_repo(temp.path())
        .env("PATH", &empty_path)
        .arg("--test")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1);

    let log = log_contents(temp.path());
    assert!(log.contains("placeholder"), "{}", log);
    assert!(log.contains("Test results: 0/4 tests passed"), "{}", log);
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn test_create_runs_end_to_end() {
    let mock = MockGitHub::start();
    mock.on_create(201, created_body(USERNAME, "demo"));
    let sandbox = GitSandbox::with_alias(ALIAS);
    let bare = sandbox.bare_remote(USERNAME, "demo");
    let config = write_config(sandbox.root(), &sample_settings(&mock.uri()));

    init_repo_in(&sandbox)
        .arg("demo")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Repository 'demo' created successfully!",
        ))
        .stdout(predicate::str::contains(
            "  - GitHub: https://github.com/alice/demo",
        ))
        .stdout(predicate::str::contains("  - Local: ./demo"));

    let repo_dir = sandbox.work_dir().join("demo");
    assert_eq!(commit_messages(&repo_dir), vec!["first commit"]);
    assert!(has_branch(&bare, "main"));
    assert!(log_contents(&sandbox.work_dir()).contains("Successfully created GitHub repository"));
}

#[test]
fn test_remote_failure_points_at_log_file() {
    let mock = MockGitHub::start();
    mock.on_create(401, json!({"message": "Bad credentials"}));
    let sandbox = GitSandbox::with_alias(ALIAS);
    let config = write_config(sandbox.root(), &sample_settings(&mock.uri()));

    init_repo_in(&sandbox)
        .arg("demo")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to create repository 'demo'"))
        .stdout(predicate::str::contains("init_repo.log"));

    sandbox.assert_not_created("demo");
    assert!(log_contents(&sandbox.work_dir()).contains("Bad credentials"));
}

#[test]
fn test_invalid_name_is_rejected_without_request() {
    let mock = MockGitHub::start();
    let sandbox = GitSandbox::with_alias(ALIAS);
    let config = write_config(sandbox.root(), &sample_settings(&mock.uri()));

    init_repo_in(&sandbox)
        .arg("bad name")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to create repository"));

    assert!(mock.requests().is_empty());
}

#[test]
fn test_malformed_config_is_an_unhandled_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    init_repo(temp.path())
        .arg("demo")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("An error occurred"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_incomplete_config_names_missing_keys() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"github_token": "t"}"#).unwrap();

    init_repo(temp.path())
        .arg("demo")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("github_username"))
        .stdout(predicate::str::contains("ssh_alias"));
}
