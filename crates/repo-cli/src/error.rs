//! Error types for repo-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can reach `main`
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from repo-core
    #[error(transparent)]
    Core(#[from] repo_core::Error),

    /// Configuration error from repo-fs
    #[error(transparent)]
    Fs(#[from] repo_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
