//! Blocking GitHub API client

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;

use crate::types::{ApiError, CreateOutcome, CreateRepoRequest, RepoResponse, User};
use crate::{Error, Result};

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("init-repo/", env!("CARGO_PKG_VERSION"));
const CREATE_TIMEOUT: Duration = Duration::from_secs(30);
const USER_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticated client for one API root.
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `api_url` (e.g. `https://api.github.com`).
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
    }

    /// Create a public repository owned by the authenticated user.
    ///
    /// One attempt, 30 second timeout. A 422 saying the name is taken
    /// counts as success so re-running the tool is harmless.
    pub fn create_repository(&self, name: &str) -> Result<CreateOutcome> {
        tracing::info!(repo = name, "Creating GitHub repository");

        let url = format!("{}/user/repos", self.api_url);
        let response = self
            .request(self.http.post(&url))
            .timeout(CREATE_TIMEOUT)
            .json(&CreateRepoRequest::public(name))
            .send()
            .map_err(|e| {
                tracing::error!(error = %e, "Request failed");
                Error::from(e)
            })?;

        let status = response.status();
        let body = response.text().unwrap_or_default();

        match status {
            StatusCode::CREATED => {
                tracing::info!(repo = name, "Successfully created GitHub repository");
                let html_url = serde_json::from_str::<RepoResponse>(&body)
                    .ok()
                    .and_then(|r| r.html_url);
                Ok(CreateOutcome::Created { html_url })
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let api_error: ApiError = serde_json::from_str(&body).unwrap_or_default();
                if api_error.is_already_exists() {
                    tracing::warn!(repo = name, "Repository already exists on GitHub");
                    Ok(CreateOutcome::AlreadyExists)
                } else {
                    let message = api_error.describe();
                    tracing::error!("GitHub API error: {}", message);
                    Err(Error::RemoteRejected { message })
                }
            }
            other => {
                tracing::error!(status = other.as_u16(), "Failed to create repository");
                tracing::error!("Response: {}", body);
                Err(Error::RemoteUnreachable {
                    reason: format!("unexpected status {}: {}", other.as_u16(), body),
                })
            }
        }
    }

    /// Fetch the authenticated user.
    pub fn current_user(&self) -> Result<User> {
        let url = format!("{}/user", self.api_url);
        let response = self
            .request(self.http.get(&url))
            .timeout(USER_TIMEOUT)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<User>()?)
    }
}
