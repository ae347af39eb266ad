//! Sample settings and config file writers.

use std::fs;
use std::path::{Path, PathBuf};

use repo_fs::Settings;

/// The token used by every sample configuration.
pub const TOKEN: &str = "t";

/// The account used by every sample configuration.
pub const USERNAME: &str = "alice";

/// The SSH alias used by every sample configuration.
pub const ALIAS: &str = "gh";

/// Settings `{t, alice, gh, main}` pointed at the given API root.
pub fn sample_settings(api_url: &str) -> Settings {
    Settings {
        github_token: TOKEN.to_string(),
        github_username: USERNAME.to_string(),
        ssh_alias: ALIAS.to_string(),
        default_branch: "main".to_string(),
        github_api_url: api_url.to_string(),
    }
}

/// Write `settings` as pretty JSON to `dir/config.json` and return the path.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_config(dir: &Path, settings: &Settings) -> PathBuf {
    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(settings)
        .unwrap_or_else(|e| panic!("write_config: failed to serialize settings: {e}"));
    fs::write(&path, json)
        .unwrap_or_else(|e| panic!("write_config: failed to write {}: {e}", path.display()));
    path
}
