//! Settings file discovery and loading
//!
//! The settings file is searched for in an ordered list of directories and
//! parsed according to its extension. When nothing is found a placeholder
//! file is written next to the program so the user has something to edit.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR_NAME, ConfigFormat, DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_CONFIG_FILE,
    PLACEHOLDER_TOKEN,
};
use crate::{Error, Result, io};

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn is_default_api_url(url: &str) -> bool {
    url == DEFAULT_API_URL
}

/// User settings loaded from the config file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Personal access token used for the GitHub API
    pub github_token: String,

    /// Account that owns the created repositories
    pub github_username: String,

    /// SSH host alias used for the git remote
    pub ssh_alias: String,

    /// Branch the first commit is pushed to
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// GitHub REST API root
    #[serde(default = "default_api_url", skip_serializing_if = "is_default_api_url")]
    pub github_api_url: String,
}

impl Settings {
    /// Keys that must be present in every settings file.
    pub const REQUIRED_KEYS: [&'static str; 3] = ["github_token", "github_username", "ssh_alias"];

    /// Settings with obviously fake values, written when no file exists.
    pub fn placeholder() -> Self {
        Self {
            github_token: PLACEHOLDER_TOKEN.to_string(),
            github_username: "YourGitHubUsername".to_string(),
            ssh_alias: "github-alias".to_string(),
            default_branch: default_branch(),
            github_api_url: default_api_url(),
        }
    }

    /// Whether the token is still the placeholder value.
    pub fn has_placeholder_token(&self) -> bool {
        self.github_token == PLACEHOLDER_TOKEN
    }

    /// Names of required fields that are present but empty.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let values = [&self.github_token, &self.github_username, &self.ssh_alias];
        Self::REQUIRED_KEYS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect()
    }

    /// Git remote URL for a repository, reached through the SSH alias.
    pub fn remote_url(&self, repo_name: &str) -> String {
        format!(
            "{}:{}/{}.git",
            self.ssh_alias, self.github_username, repo_name
        )
    }

    /// Browser URL of a repository on github.com.
    pub fn web_url(&self, repo_name: &str) -> String {
        format!("https://github.com/{}/{}", self.github_username, repo_name)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("github_token", &"<redacted>")
            .field("github_username", &self.github_username)
            .field("ssh_alias", &self.ssh_alias)
            .field("default_branch", &self.default_branch)
            .field("github_api_url", &self.github_api_url)
            .finish()
    }
}

/// Searches the standard locations for a settings file.
///
/// Candidates, in order:
/// 1. the requested path as given
/// 2. `<program dir>/<requested>`
/// 3. `<user config dir>/init_repo/<requested>`
/// 4. `<home dir>/<requested>`
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    requested: PathBuf,
    program_dir: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl ConfigLocator {
    /// Create a locator for the given file using the platform directories.
    pub fn new(requested: impl Into<PathBuf>) -> Self {
        let program_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self {
            requested: requested.into(),
            program_dir,
            user_config_dir: dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME)),
            home_dir: dirs::home_dir(),
        }
    }

    /// Override the program directory (also where placeholders are written).
    pub fn with_program_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.program_dir = Some(dir.into());
        self
    }

    /// Override the user config directory.
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Override the home directory.
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    /// Every path that is searched, in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.requested.clone()];
        for dir in [&self.program_dir, &self.user_config_dir, &self.home_dir]
            .into_iter()
            .flatten()
        {
            paths.push(dir.join(&self.requested));
        }
        paths
    }

    /// The first candidate that exists.
    pub fn find(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|p| p.exists())
    }

    /// Locate and load the settings.
    ///
    /// When no candidate exists, a placeholder file is written to the
    /// program directory and [`Error::ConfigNotFound`] is returned.
    pub fn load(&self) -> Result<Settings> {
        match self.find() {
            Some(path) => {
                tracing::info!(path = %path.display(), "Found config file");
                load_settings(&path)
            }
            None => {
                let searched = self.candidates();
                tracing::error!("Config file not found. Searched in:");
                for path in &searched {
                    tracing::error!("  - {}", path.display());
                }

                match self.write_placeholder() {
                    Ok(Some(path)) => {
                        tracing::info!(path = %path.display(), "Created sample config file");
                        tracing::info!("Please edit the config file with your actual values");
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to create sample config");
                    }
                }

                Err(Error::ConfigNotFound { searched })
            }
        }
    }

    /// Write placeholder settings into the program directory.
    ///
    /// Returns the written path, or `None` when there is no program
    /// directory or a file is already there.
    pub fn write_placeholder(&self) -> Result<Option<PathBuf>> {
        let Some(dir) = &self.program_dir else {
            return Ok(None);
        };

        let file_name = self
            .requested
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let path = dir.join(file_name);
        if path.exists() {
            return Ok(None);
        }

        let content = serialize_settings(&Settings::placeholder(), &path)?;
        io::write_text(&path, &content)?;
        Ok(Some(path))
    }
}

/// Parse a settings file, checking that every required key is present.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = io::read_text(path)?;
    let format = ConfigFormat::from_path(path);
    let malformed = |message: String| Error::ConfigMalformed {
        path: path.to_path_buf(),
        format: format.name().into(),
        message,
    };

    let value: serde_json::Value = match format {
        ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| malformed(e.to_string())),
        ConfigFormat::Toml => toml::from_str(&content).map_err(|e| malformed(e.to_string())),
        ConfigFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| malformed(e.to_string())),
    }?;

    let Some(map) = value.as_object() else {
        return Err(malformed("expected a key-value mapping at the top level".into()));
    };

    let missing: Vec<String> = Settings::REQUIRED_KEYS
        .iter()
        .filter(|key| !map.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::ConfigIncomplete {
            path: path.to_path_buf(),
            missing,
        });
    }

    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}

fn serialize_settings(settings: &Settings, path: &Path) -> Result<String> {
    let format = ConfigFormat::from_path(path);
    let failed = |message: String| Error::ConfigSerialize {
        path: path.to_path_buf(),
        format: format.name().into(),
        message,
    };

    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(settings)
            .map(|s| s + "\n")
            .map_err(|e| failed(e.to_string())),
        ConfigFormat::Toml => toml::to_string_pretty(settings).map_err(|e| failed(e.to_string())),
        ConfigFormat::Yaml => serde_yaml::to_string(settings).map_err(|e| failed(e.to_string())),
    }
}
