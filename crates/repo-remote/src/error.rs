//! Error types for repo-remote

/// Result type for repo-remote operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the GitHub API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub understood the request and refused it (HTTP 422)
    #[error("GitHub API error: {message}")]
    RemoteRejected { message: String },

    /// The request failed in transport or returned an unexpected status
    #[error("GitHub API unreachable: {reason}")]
    RemoteUnreachable { reason: String },

    /// A read-only request returned something other than 200
    #[error("GitHub API returned status {status}")]
    UnexpectedStatus { status: u16 },
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::RemoteUnreachable {
            reason: e.to_string(),
        }
    }
}
