//! End-to-end integration test for the whole initialization path
//!
//! This test exercises the complete flow: config file on disk -> locator ->
//! remote creation against a mock API -> local setup -> push into a bare
//! repository standing in for GitHub.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use repo_core::{Error, RepoInitializer, SelfCheck};
use repo_fs::{ConfigLocator, Settings};
use repo_git::CommandRunner;
use repo_test_utils::git::{GitSandbox, commit_messages, current_branch, upstream_config};
use repo_test_utils::http::{MockGitHub, already_exists_body, created_body};
use repo_test_utils::settings::{ALIAS, USERNAME};
use serde_json::json;

fn runner_for(sandbox: &GitSandbox) -> CommandRunner {
    sandbox
        .envs()
        .into_iter()
        .fold(CommandRunner::new(), |runner, (key, value)| {
            runner.with_env(key, value)
        })
        .with_env("GIT_CEILING_DIRECTORIES", sandbox.root())
}

/// Load settings the way the binary does, but with every fallback directory
/// pinned inside the sandbox.
fn load(sandbox: &GitSandbox, config: &Path) -> Settings {
    let isolated = sandbox.root().join("isolated");
    ConfigLocator::new(config)
        .with_program_dir(&isolated)
        .with_user_config_dir(&isolated)
        .with_home_dir(&isolated)
        .load()
        .unwrap()
}

/// Files tracked at the tip of `branch` in a bare repository.
fn tree_entries(bare: &Path, branch: &str) -> Vec<String> {
    let repo = git2::Repository::open_bare(bare).unwrap();
    let commit = repo
        .find_reference(&format!("refs/heads/{branch}"))
        .unwrap()
        .peel_to_commit()
        .unwrap();
    let mut names: Vec<String> = commit
        .tree()
        .unwrap()
        .iter()
        .filter_map(|entry| entry.name().map(str::to_string))
        .collect();
    names.sort();
    names
}

#[test]
fn test_toml_config_to_pushed_repository() {
    let mock = MockGitHub::start();
    mock.on_create(201, created_body(USERNAME, "demo"));
    let sandbox = GitSandbox::with_alias(ALIAS);
    let bare = sandbox.bare_remote(USERNAME, "demo");

    let config = sandbox.root().join("settings.toml");
    fs::write(
        &config,
        format!(
            "github_token = \"t\"\ngithub_username = \"{USERNAME}\"\nssh_alias = \"{ALIAS}\"\n\
             github_api_url = \"{}\"\n",
            mock.uri()
        ),
    )
    .unwrap();

    let settings = load(&sandbox, &config);
    assert_eq!(settings.default_branch, "main");

    let initializer =
        RepoInitializer::new(settings, runner_for(&sandbox), sandbox.work_dir()).unwrap();
    let report = initializer.initialize("demo").unwrap();

    assert_eq!(report.web_url, "https://github.com/alice/demo");
    assert!(
        fs::read_to_string(report.local_path.join("README.md"))
            .unwrap()
            .starts_with("# demo")
    );
    assert_eq!(commit_messages(&report.local_path), vec!["first commit"]);
    assert_eq!(current_branch(&report.local_path).as_deref(), Some("main"));
    assert_eq!(
        upstream_config(&report.local_path, "main"),
        Some(("origin".to_string(), "refs/heads/main".to_string()))
    );
    assert_eq!(tree_entries(&bare, "main"), vec![".gitignore", "README.md"]);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["name"], "demo");
    assert_eq!(body["private"], false);
}

#[test]
fn test_rerun_with_same_name_stops_at_existing_directory() {
    let mock = MockGitHub::start();
    mock.on_create_once(201, created_body(USERNAME, "demo"));
    mock.on_create(422, already_exists_body());
    let sandbox = GitSandbox::with_alias(ALIAS);
    sandbox.bare_remote(USERNAME, "demo");

    let config = sandbox.root().join("config.json");
    fs::write(
        &config,
        serde_json::to_string(&json!({
            "github_token": "t",
            "github_username": USERNAME,
            "ssh_alias": ALIAS,
            "github_api_url": mock.uri(),
        }))
        .unwrap(),
    )
    .unwrap();

    let initializer = RepoInitializer::new(
        load(&sandbox, &config),
        runner_for(&sandbox),
        sandbox.work_dir(),
    )
    .unwrap();

    initializer.initialize("demo").unwrap();
    let err = initializer.initialize("demo").unwrap_err();

    // The second remote call is accepted as "already exists"; the local
    // working copy is what stops the rerun.
    assert!(matches!(err, Error::Git(repo_git::Error::DirectoryExists { .. })));
    assert_eq!(mock.requests().len(), 2);
    assert_eq!(
        commit_messages(&sandbox.work_dir().join("demo")),
        vec!["first commit"]
    );
}

#[test]
fn test_yaml_config_feeds_self_check() {
    let mock = MockGitHub::start();
    mock.on_user(200, json!({"login": USERNAME}));
    let sandbox = GitSandbox::new();

    let config = sandbox.root().join("config.yaml");
    fs::write(
        &config,
        format!(
            "github_token: t\ngithub_username: {USERNAME}\nssh_alias: {ALIAS}\ngithub_api_url: {}\n",
            mock.uri()
        ),
    )
    .unwrap();

    let check = SelfCheck::new(load(&sandbox, &config), CommandRunner::new());

    assert!(check.check_configuration().unwrap());
    assert!(check.check_connectivity().unwrap());
    assert!(check.check_tooling().unwrap());
}

#[test]
fn test_missing_config_writes_placeholder_that_fails_self_check() {
    let sandbox = GitSandbox::new();
    let program_dir = sandbox.root().join("bin");
    fs::create_dir(&program_dir).unwrap();
    let elsewhere = sandbox.root().join("nowhere");

    let locator = ConfigLocator::new("config.json")
        .with_program_dir(&program_dir)
        .with_user_config_dir(&elsewhere)
        .with_home_dir(&elsewhere);

    let err = locator.load().unwrap_err();
    assert!(matches!(err, repo_fs::Error::ConfigNotFound { .. }));

    // The second attempt finds the placeholder, which loads but is rejected
    let settings = locator.load().unwrap();
    assert!(settings.has_placeholder_token());
    assert!(
        !SelfCheck::new(settings, CommandRunner::new())
            .check_configuration()
            .unwrap()
    );
}
