//! Request and response shapes for the GitHub REST API

use serde::{Deserialize, Serialize};

/// Body of `POST /user/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepoRequest<'a> {
    pub name: &'a str,
    pub description: String,
    pub private: bool,
    pub auto_init: bool,
}

impl<'a> CreateRepoRequest<'a> {
    /// A public repository with no initial commit on the remote side.
    pub fn public(name: &'a str) -> Self {
        Self {
            name,
            description: format!("Repository for {}", name),
            private: false,
            auto_init: false,
        }
    }
}

/// The subset of a repository response the tool uses.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoResponse {
    pub html_url: Option<String>,
}

/// GitHub's error body: a summary plus per-field details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Whether GitHub says the repository name is already taken.
    pub fn is_already_exists(&self) -> bool {
        std::iter::once(self.message.as_str())
            .chain(self.errors.iter().filter_map(|e| e.message.as_deref()))
            .any(|m| m.to_lowercase().contains("already exists"))
    }

    /// Summary and details joined into one line.
    pub fn describe(&self) -> String {
        let details: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();
        match (self.message.is_empty(), details.is_empty()) {
            (true, true) => "Unknown error".to_string(),
            (false, true) => self.message.clone(),
            (true, false) => details.join("; "),
            (false, false) => format!("{} ({})", self.message, details.join("; ")),
        }
    }
}

/// Result of a successful create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// HTTP 201; GitHub's browser URL when it sent one
    Created { html_url: Option<String> },
    /// HTTP 422 saying the name is taken; treated as success
    AlreadyExists,
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}
