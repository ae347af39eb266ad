//! Constants and enums for well-known file names.

use std::path::Path;

/// Default settings file name searched for when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Subdirectory of the user config directory that may hold the settings file.
pub const CONFIG_DIR_NAME: &str = "init_repo";

/// Log file written to the working directory.
pub const LOG_FILE: &str = "init_repo.log";

/// Token value written into placeholder settings files.
pub const PLACEHOLDER_TOKEN: &str = "your_github_personal_access_token_here";

/// Branch used when the settings do not name one.
pub const DEFAULT_BRANCH: &str = "main";

/// GitHub REST API root used when the settings do not name one.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Files created inside a freshly initialized repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoFile {
    /// The `README.md` file
    Readme,
    /// The `.gitignore` file
    Gitignore,
}

impl RepoFile {
    /// Get the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Readme => "README.md",
            Self::Gitignore => ".gitignore",
        }
    }
}

impl AsRef<Path> for RepoFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for RepoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialization format of a settings file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    ///
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    /// - anything else (including no extension) -> JSON
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Self::Toml,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Human-readable format name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}
