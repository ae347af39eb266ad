//! End-to-end repository initialization
//!
//! The remote is created first. If that fails nothing local is touched, so
//! a failed run never leaves an orphaned working copy behind.

use std::path::PathBuf;

use repo_fs::{Settings, validate_repo_name};
use repo_git::{CommandRunner, LocalInitializer};
use repo_remote::{CreateOutcome, GitHubClient};

use crate::Result;

/// Where a successfully initialized repository lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub repo_name: String,
    /// Browser URL of the hosted repository
    pub web_url: String,
    /// The new working copy
    pub local_path: PathBuf,
}

/// Creates a hosted repository and its local working copy.
pub struct RepoInitializer {
    settings: Settings,
    client: GitHubClient,
    local: LocalInitializer,
}

impl RepoInitializer {
    /// Create an initializer that puts working copies under `base_dir`.
    pub fn new(settings: Settings, runner: CommandRunner, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = GitHubClient::new(&settings.github_api_url, &settings.github_token)?;
        Ok(Self {
            settings,
            client,
            local: LocalInitializer::new(runner, base_dir),
        })
    }

    /// Create the hosted repository.
    pub fn create_remote(&self, repo_name: &str) -> Result<CreateOutcome> {
        Ok(self.client.create_repository(repo_name)?)
    }

    /// Create and push the local working copy.
    pub fn setup_local(&self, repo_name: &str) -> Result<PathBuf> {
        Ok(self.local.initialize(repo_name, &self.settings)?)
    }

    /// Validate the name, create the remote, then the local working copy.
    ///
    /// Stops at the first failure.
    pub fn initialize(&self, repo_name: &str) -> Result<InitReport> {
        tracing::info!(repo = repo_name, "Starting repository initialization");
        validate_repo_name(repo_name)?;

        let outcome = self.create_remote(repo_name)?;
        let local_path = self.setup_local(repo_name)?;

        let web_url = match outcome {
            CreateOutcome::Created {
                html_url: Some(url),
            } => url,
            _ => self.settings.web_url(repo_name),
        };

        tracing::info!(repo = repo_name, "Repository initialized successfully!");
        Ok(InitReport {
            repo_name: repo_name.to_string(),
            web_url,
            local_path,
        })
    }
}
