//! Error types for repo-fs

use std::path::PathBuf;

/// Result type for repo-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repo-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found (searched {} locations)", .searched.len())]
    ConfigNotFound { searched: Vec<PathBuf> },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigMalformed {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Missing required config keys in {path}: {}", .missing.join(", "))]
    ConfigIncomplete { path: PathBuf, missing: Vec<String> },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Invalid repository name '{name}': {reason}")]
    InvalidRepoName { name: String, reason: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
