//! Repository creation command

use std::path::Path;

use colored::Colorize;
use repo_core::RepoInitializer;
use repo_fs::ConfigLocator;
use repo_fs::constants::LOG_FILE;
use repo_git::CommandRunner;

use crate::error::Result;

/// Create `repo_name` on GitHub and as a working copy under `base_dir`.
///
/// Returns `Ok(false)` when initialization fails; configuration errors are
/// returned as `Err`.
pub fn run_create(config: &Path, base_dir: &Path, repo_name: &str) -> Result<bool> {
    let settings = ConfigLocator::new(config).load()?;
    let initializer = RepoInitializer::new(settings, CommandRunner::new(), base_dir)?;

    match initializer.initialize(repo_name) {
        Ok(report) => {
            println!("{} Repository '{}' created successfully!", "✓".green(), repo_name);
            println!("  - GitHub: {}", report.web_url);
            println!("  - Local: ./{}", repo_name);
            Ok(true)
        }
        Err(e) => {
            tracing::error!(repo = repo_name, error = %e, "Repository initialization failed");
            println!("{} Failed to create repository '{}'", "✗".red(), repo_name);
            println!("Check the log file '{}' for details", LOG_FILE);
            Ok(false)
        }
    }
}
