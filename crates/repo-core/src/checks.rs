//! Self-check suite
//!
//! Four independent checks run before a real initialization: settings,
//! GitHub API access, the `git` executable and the SSH alias. Every check
//! runs even if an earlier one failed or errored.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use repo_fs::Settings;
use repo_git::CommandRunner;
use repo_remote::GitHubClient;

use crate::Result;

static GIT_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"git version (\d+(?:\.\d+)+)").expect("git version regex is valid")
});

/// The four self-checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Configuration,
    Connectivity,
    Tooling,
    Transport,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Connectivity => "github api connection",
            Self::Tooling => "git availability",
            Self::Transport => "ssh configuration",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub passed: bool,
}

/// Ordered outcomes of a suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub results: Vec<CheckResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// True only when every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// How the SSH probe's output was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportVerdict {
    Authenticated,
    PermissionDenied,
    UnresolvedHost,
    /// None of the known phrases; counted as a pass
    Inconclusive,
}

impl TransportVerdict {
    pub fn passes(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Inconclusive)
    }
}

/// Classify the output of `ssh -T git@<alias>`.
///
/// GitHub's probe exits non-zero even on success, so the exit status is
/// ignored and the text decides. This is string matching on another
/// tool's output and will misread unfamiliar wording as inconclusive.
pub fn classify_transport_probe(stdout: &str, stderr: &str) -> TransportVerdict {
    let stdout = stdout.to_lowercase();
    let stderr = stderr.to_lowercase();

    if stderr.contains("successfully authenticated")
        || stdout.contains("successfully authenticated")
    {
        TransportVerdict::Authenticated
    } else if stderr.contains("permission denied") {
        TransportVerdict::PermissionDenied
    } else if stderr.contains("could not resolve hostname") {
        TransportVerdict::UnresolvedHost
    } else {
        TransportVerdict::Inconclusive
    }
}

/// Run checks in order, counting an `Err` as a failure, and log the tally.
pub fn run_checks(checks: &[(CheckKind, &dyn Fn() -> Result<bool>)]) -> SuiteReport {
    tracing::info!("Running test suite...");

    let results: Vec<CheckResult> = checks
        .iter()
        .map(|(kind, check)| {
            let passed = check().unwrap_or_else(|e| {
                tracing::error!(check = %kind, error = %e, "Test failed with error");
                false
            });
            CheckResult {
                kind: *kind,
                passed,
            }
        })
        .collect();

    let report = SuiteReport { results };
    tracing::info!(
        "Test results: {}/{} tests passed",
        report.passed(),
        report.total()
    );
    if report.all_passed() {
        tracing::info!("✓ All tests passed!");
    } else {
        tracing::error!("✗ {} tests failed", report.total() - report.passed());
    }
    report
}

/// The self-check suite for one set of settings.
pub struct SelfCheck {
    settings: Settings,
    runner: CommandRunner,
}

impl SelfCheck {
    pub fn new(settings: Settings, runner: CommandRunner) -> Self {
        Self { settings, runner }
    }

    /// Required fields are filled in and the token is not the placeholder.
    pub fn check_configuration(&self) -> Result<bool> {
        tracing::info!("Testing configuration loading...");

        let empty = self.settings.empty_fields();
        if !empty.is_empty() {
            tracing::error!("Empty config keys: {:?}", empty);
            return Ok(false);
        }
        if self.settings.has_placeholder_token() {
            tracing::error!("GitHub token appears to be placeholder value");
            return Ok(false);
        }

        tracing::info!("✓ Configuration loading test passed");
        Ok(true)
    }

    /// The token can fetch the current user.
    pub fn check_connectivity(&self) -> Result<bool> {
        tracing::info!("Testing GitHub API connection...");

        let client = GitHubClient::new(&self.settings.github_api_url, &self.settings.github_token)?;
        let user = match client.current_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "GitHub API connection failed");
                return Ok(false);
            }
        };

        tracing::info!("✓ GitHub API connection test passed (User: {})", user.login);
        if user.login != self.settings.github_username {
            tracing::warn!(
                "Username mismatch: API says '{}', config says '{}'",
                user.login,
                self.settings.github_username
            );
        }
        Ok(true)
    }

    /// `git --version` runs and reports a version.
    pub fn check_tooling(&self) -> Result<bool> {
        tracing::info!("Testing git availability...");

        let output = self.runner.run("git", &["--version"], None, false);
        if output.exited_zero() && output.stdout.to_lowercase().contains("git version") {
            let version = GIT_VERSION_RE
                .captures(&output.stdout)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .unwrap_or("unknown");
            tracing::info!("✓ Git availability test passed (version {})", version);
            Ok(true)
        } else {
            tracing::error!("Git is not available or not working properly");
            Ok(false)
        }
    }

    /// An SSH authentication probe through the configured alias.
    pub fn check_transport(&self) -> Result<bool> {
        tracing::info!("Testing SSH configuration...");

        let alias = &self.settings.ssh_alias;
        let target = format!("git@{}", alias);
        let output = self.runner.run("ssh", &["-T", &target], None, false);
        if output.code.is_none() && !output.success {
            tracing::error!("Could not run ssh: {}", output.stderr);
            return Ok(false);
        }

        let verdict = classify_transport_probe(&output.stdout, &output.stderr);
        match verdict {
            TransportVerdict::Authenticated => {
                tracing::info!("✓ SSH configuration test passed");
            }
            TransportVerdict::PermissionDenied => {
                tracing::error!("SSH permission denied - check your SSH key configuration");
            }
            TransportVerdict::UnresolvedHost => {
                tracing::error!(
                    "SSH alias '{}' could not be resolved - check your SSH config",
                    alias
                );
            }
            TransportVerdict::Inconclusive => {
                tracing::warn!("SSH test inconclusive - check manually if needed");
                tracing::debug!("SSH test output: {}", output.stderr);
            }
        }
        Ok(verdict.passes())
    }

    /// Run all four checks; passes only if every one passes.
    pub fn run_all_tests(&self) -> SuiteReport {
        let checks: [(CheckKind, &dyn Fn() -> Result<bool>); 4] = [
            (CheckKind::Configuration, &|| self.check_configuration()),
            (CheckKind::Connectivity, &|| self.check_connectivity()),
            (CheckKind::Tooling, &|| self.check_tooling()),
            (CheckKind::Transport, &|| self.check_transport()),
        ];
        run_checks(&checks)
    }
}
