//! Isolated git environment for end-to-end setup tests.
//!
//! A [`GitSandbox`] owns a temporary directory with three parts:
//!
//! - `work/`: where new repositories are created
//! - `remotes/`: bare repositories standing in for the hosting service
//! - `gitconfig`: a private global config with a test identity and a
//!   `url.<remotes>/.insteadOf <alias>:` rewrite, so a remote such as
//!   `gh:alice/demo.git` is pushed to `remotes/alice/demo.git` without SSH
//!
//! Point `git` at the sandbox with the variables from [`GitSandbox::envs`].

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A temporary, fully isolated git environment.
pub struct GitSandbox {
    temp_dir: TempDir,
}

impl Default for GitSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl GitSandbox {
    /// Create the sandbox with an identity-only global config.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("GitSandbox: failed to create temp dir");
        let sandbox = Self { temp_dir };

        fs::create_dir(sandbox.work_dir())
            .unwrap_or_else(|e| panic!("GitSandbox: failed to create work/: {e}"));
        fs::create_dir(sandbox.remotes_dir())
            .unwrap_or_else(|e| panic!("GitSandbox: failed to create remotes/: {e}"));
        fs::write(
            sandbox.gitconfig(),
            "[user]\n\tname = Test User\n\temail = test@example.com\n\
             [commit]\n\tgpgsign = false\n\
             [init]\n\tdefaultBranch = master\n",
        )
        .unwrap_or_else(|e| panic!("GitSandbox: failed to write gitconfig: {e}"));

        sandbox
    }

    /// Create the sandbox and route `alias:` remotes into `remotes/`.
    pub fn with_alias(alias: &str) -> Self {
        let sandbox = Self::new();
        sandbox.route_alias(alias);
        sandbox
    }

    /// Root of the sandbox.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory new working copies are created in.
    pub fn work_dir(&self) -> PathBuf {
        self.root().join("work")
    }

    /// Directory holding the bare "hosted" repositories.
    pub fn remotes_dir(&self) -> PathBuf {
        self.root().join("remotes")
    }

    /// Path of the private global git config.
    pub fn gitconfig(&self) -> PathBuf {
        self.root().join("gitconfig")
    }

    /// Environment variables that confine `git` to this sandbox.
    pub fn envs(&self) -> Vec<(&'static str, OsString)> {
        vec![
            ("GIT_CONFIG_GLOBAL", self.gitconfig().into_os_string()),
            ("GIT_CONFIG_NOSYSTEM", OsString::from("1")),
            ("GIT_TERMINAL_PROMPT", OsString::from("0")),
        ]
    }

    /// Rewrite `alias:<path>` URLs to `<remotes>/<path>`.
    ///
    /// # Panics
    /// Panics if the config cannot be updated.
    pub fn route_alias(&self, alias: &str) {
        let mut config = fs::read_to_string(self.gitconfig())
            .unwrap_or_else(|e| panic!("route_alias: failed to read gitconfig: {e}"));
        config.push_str(&format!(
            "[url \"{}/\"]\n\tinsteadOf = {}:\n",
            self.remotes_dir().display(),
            alias
        ));
        fs::write(self.gitconfig(), config)
            .unwrap_or_else(|e| panic!("route_alias: failed to write gitconfig: {e}"));
    }

    /// Create an empty bare repository at `remotes/<owner>/<name>.git`.
    ///
    /// # Panics
    /// Panics if `git init --bare` fails.
    pub fn bare_remote(&self, owner: &str, name: &str) -> PathBuf {
        let path = self.remotes_dir().join(owner).join(format!("{name}.git"));
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("bare_remote: failed to create {}: {e}", path.display()));

        let output = Command::new("git")
            .args(["init", "--bare"])
            .current_dir(&path)
            .envs(self.envs())
            .output()
            .unwrap_or_else(|e| panic!("bare_remote: failed to run git: {e}"));
        if !output.status.success() {
            panic!(
                "bare_remote: `git init --bare` failed:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        path
    }

    /// Assert that `path` (relative to `work/`) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_created(&self, path: &str) {
        let full_path = self.work_dir().join(path);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}

/// Messages of every commit reachable from `HEAD`, newest first.
///
/// # Panics
/// Panics if the repository cannot be opened or walked.
pub fn commit_messages(repo_path: &Path) -> Vec<String> {
    let repo = git2::Repository::open(repo_path)
        .unwrap_or_else(|e| panic!("commit_messages: failed to open {}: {e}", repo_path.display()));
    let mut walk = repo.revwalk().expect("commit_messages: revwalk failed");
    walk.push_head().expect("commit_messages: HEAD has no commit");
    walk.map(|oid| {
        let oid = oid.expect("commit_messages: bad oid");
        let commit = repo.find_commit(oid).expect("commit_messages: missing commit");
        commit.summary().unwrap_or_default().to_string()
    })
    .collect()
}

/// Short name of the branch `HEAD` points at.
pub fn current_branch(repo_path: &Path) -> Option<String> {
    let repo = git2::Repository::open(repo_path).ok()?;
    let head = repo.head().ok()?;
    head.shorthand().map(str::to_string)
}

/// Configured URL of a remote, as written (before any `insteadOf` rewrite).
pub fn remote_url(repo_path: &Path, remote: &str) -> Option<String> {
    let repo = git2::Repository::open(repo_path).ok()?;
    let config = repo.config().ok()?;
    config.get_string(&format!("remote.{remote}.url")).ok()
}

/// `(branch.<b>.remote, branch.<b>.merge)` for a local branch.
pub fn upstream_config(repo_path: &Path, branch: &str) -> Option<(String, String)> {
    let repo = git2::Repository::open(repo_path).ok()?;
    let config = repo.config().ok()?;
    let remote = config.get_string(&format!("branch.{branch}.remote")).ok()?;
    let merge = config.get_string(&format!("branch.{branch}.merge")).ok()?;
    Some((remote, merge))
}

/// Whether a bare repository holds `refs/heads/<branch>`.
pub fn has_branch(bare_path: &Path, branch: &str) -> bool {
    git2::Repository::open_bare(bare_path)
        .map(|repo| repo.find_reference(&format!("refs/heads/{branch}")).is_ok())
        .unwrap_or(false)
}
