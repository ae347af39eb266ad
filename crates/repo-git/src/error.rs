//! Error types for repo-git

use std::path::PathBuf;

use crate::local::Step;

/// Result type for repo-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a local repository
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Directory {path} already exists")]
    DirectoryExists { path: PathBuf },

    #[error("Invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("Local setup failed at step '{step}': {detail}{}", .hint.map(|h| format!(" ({h})")).unwrap_or_default())]
    LocalStepFailed {
        step: Step,
        detail: String,
        hint: Option<&'static str>,
    },
}

impl Error {
    /// The step that failed, if this is a step failure.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::LocalStepFailed { step, .. } => Some(*step),
            Self::DirectoryExists { .. } | Self::InvalidBranchName { .. } => None,
        }
    }
}
