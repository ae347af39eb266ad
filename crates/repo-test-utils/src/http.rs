//! Mock GitHub API usable from synchronous tests.
//!
//! `wiremock` is async; the blocking HTTP client must not run inside a tokio
//! runtime. [`MockGitHub`] owns a private multi-threaded runtime that serves
//! the mock while the test thread talks to it with a blocking client.

use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// A mock GitHub REST API on a random local port.
pub struct MockGitHub {
    server: Option<MockServer>,
    runtime: Runtime,
}

impl Default for MockGitHub {
    fn default() -> Self {
        Self::start()
    }
}

impl MockGitHub {
    /// Start the mock server.
    ///
    /// # Panics
    /// Panics if the runtime cannot be built.
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap_or_else(|e| panic!("MockGitHub: failed to build runtime: {e}"));
        let server = runtime.block_on(MockServer::start());
        Self {
            server: Some(server),
            runtime,
        }
    }

    fn server(&self) -> &MockServer {
        self.server.as_ref().expect("MockGitHub: server already shut down")
    }

    /// Base URL to use as the API root.
    pub fn uri(&self) -> String {
        self.server().uri()
    }

    /// Mount an arbitrary mock.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(self.server()));
    }

    /// Respond to `POST /user/repos` with `status` and a JSON body.
    pub fn on_create(&self, status: u16, body: Value) {
        self.mount(
            Mock::given(method("POST"))
                .and(path("/user/repos"))
                .respond_with(ResponseTemplate::new(status).set_body_json(body)),
        );
    }

    /// Respond to the next `POST /user/repos` only; later requests fall
    /// through to mocks mounted afterwards.
    pub fn on_create_once(&self, status: u16, body: Value) {
        self.mount(
            Mock::given(method("POST"))
                .and(path("/user/repos"))
                .respond_with(ResponseTemplate::new(status).set_body_json(body))
                .up_to_n_times(1),
        );
    }

    /// Respond to `GET /user` with `status` and a JSON body.
    pub fn on_user(&self, status: u16, body: Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path("/user"))
                .respond_with(ResponseTemplate::new(status).set_body_json(body)),
        );
    }

    /// Every request the server has received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server().received_requests())
            .unwrap_or_default()
    }
}

impl Drop for MockGitHub {
    fn drop(&mut self) {
        let _guard = self.runtime.enter();
        drop(self.server.take());
    }
}

/// Body GitHub returns for a newly created repository.
pub fn created_body(owner: &str, name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "html_url": format!("https://github.com/{owner}/{name}"),
        "ssh_url": format!("git@github.com:{owner}/{name}.git"),
        "private": false
    })
}

/// Body GitHub returns when the repository name is taken.
pub fn already_exists_body() -> Value {
    serde_json::json!({
        "message": "Repository creation failed.",
        "errors": [{
            "resource": "Repository",
            "code": "custom",
            "field": "name",
            "message": "name already exists on this account"
        }]
    })
}
