//! Local repository setup
//!
//! Creates the working copy for a freshly created remote: directory, README,
//! `git init`, `.gitignore`, first commit, branch rename, remote and push.
//! Steps run strictly in order and the first failure stops the sequence.
//! Nothing already done is rolled back.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use repo_fs::{RepoFile, Settings, io};

use crate::command::CommandRunner;
use crate::templates::{self, FIRST_COMMIT_MESSAGE, REMOTE_NAME};
use crate::{Error, Result};

const PUSH_HINT: &str = "check your SSH alias and key configuration";

/// One step of the local setup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateDirectory,
    WriteReadme,
    InitRepository,
    WriteGitignore,
    StageFiles,
    Commit,
    RenameBranch,
    AddRemote,
    Push,
}

impl Step {
    /// Every step, in execution order.
    pub const ALL: [Step; 9] = [
        Step::CreateDirectory,
        Step::WriteReadme,
        Step::InitRepository,
        Step::WriteGitignore,
        Step::StageFiles,
        Step::Commit,
        Step::RenameBranch,
        Step::AddRemote,
        Step::Push,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDirectory => "create directory",
            Self::WriteReadme => "write README.md",
            Self::InitRepository => "git init",
            Self::WriteGitignore => "write .gitignore",
            Self::StageFiles => "git add",
            Self::Commit => "git commit",
            Self::RenameBranch => "git branch",
            Self::AddRemote => "git remote add",
            Self::Push => "git push",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sets up the local working copy inside a base directory.
#[derive(Debug, Clone)]
pub struct LocalInitializer {
    runner: CommandRunner,
    base_dir: PathBuf,
}

impl LocalInitializer {
    /// Create an initializer that creates repositories under `base_dir`.
    pub fn new(runner: CommandRunner, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            base_dir: base_dir.into(),
        }
    }

    /// Directory a repository with this name would be created in.
    pub fn repo_dir(&self, repo_name: &str) -> PathBuf {
        self.base_dir.join(repo_name)
    }

    /// Run the full setup sequence and return the new working copy's path.
    ///
    /// The repository name is expected to be validated already.
    pub fn initialize(&self, repo_name: &str, settings: &Settings) -> Result<PathBuf> {
        tracing::info!(repo = repo_name, "Setting up local repository");

        let branch = settings.default_branch.as_str();
        if branch.is_empty() || branch.starts_with('-') {
            return Err(Error::InvalidBranchName {
                name: branch.to_string(),
            });
        }

        let repo_dir = self.repo_dir(repo_name);
        // symlink_metadata so a dangling link also counts as taken
        if repo_dir.symlink_metadata().is_ok() {
            tracing::error!(path = %repo_dir.display(), "Directory already exists");
            return Err(Error::DirectoryExists { path: repo_dir });
        }

        fs::create_dir(&repo_dir).map_err(|e| step_failed(Step::CreateDirectory, e.to_string()))?;

        write_file(
            Step::WriteReadme,
            &repo_dir.join(RepoFile::Readme),
            &templates::readme(repo_name),
        )?;

        self.git(Step::InitRepository, &repo_dir, &["init"])?;

        write_file(
            Step::WriteGitignore,
            &repo_dir.join(RepoFile::Gitignore),
            templates::GITIGNORE,
        )?;
        tracing::debug!("Created .gitignore file");

        self.git(Step::StageFiles, &repo_dir, &["add", "."])?;
        self.git(Step::Commit, &repo_dir, &["commit", "-m", FIRST_COMMIT_MESSAGE])?;
        self.git(Step::RenameBranch, &repo_dir, &["branch", "-M", branch])?;

        let remote_url = settings.remote_url(repo_name);
        self.git(
            Step::AddRemote,
            &repo_dir,
            &["remote", "add", REMOTE_NAME, &remote_url],
        )?;

        if let Err(e) = self.git(Step::Push, &repo_dir, &["push", "-u", REMOTE_NAME, branch]) {
            tracing::error!("Failed to push to remote. Check your SSH configuration.");
            return Err(e);
        }

        tracing::info!(repo = repo_name, "Successfully set up local repository");
        Ok(repo_dir)
    }

    fn git(&self, step: Step, repo_dir: &Path, args: &[&str]) -> Result<()> {
        let output = self.runner.run("git", args, Some(repo_dir), true);
        if output.success {
            Ok(())
        } else {
            Err(step_failed(step, output.diagnostic()))
        }
    }
}

fn write_file(step: Step, path: &Path, content: &str) -> Result<()> {
    io::write_text(path, content).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to write file");
        step_failed(step, e.to_string())
    })
}

fn step_failed(step: Step, detail: String) -> Error {
    let hint = (step == Step::Push).then_some(PUSH_HINT);
    Error::LocalStepFailed { step, detail, hint }
}
