//! Error types for repo-core

/// Result type for repo-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repo-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration or filesystem error from repo-fs
    #[error(transparent)]
    Fs(#[from] repo_fs::Error),

    /// Local setup error from repo-git
    #[error(transparent)]
    Git(#[from] repo_git::Error),

    /// GitHub API error from repo-remote
    #[error(transparent)]
    Remote(#[from] repo_remote::Error),
}
