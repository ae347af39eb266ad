//! GitHub REST API client for init-repo
//!
//! Two calls, both single blocking attempts: create a repository for the
//! authenticated user, and fetch that user. No retries, no pagination.

pub mod client;
pub mod error;
pub mod types;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use types::{CreateOutcome, User};
