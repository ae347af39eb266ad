//! Self-check command

use std::path::Path;

use repo_core::SelfCheck;
use repo_fs::ConfigLocator;
use repo_git::CommandRunner;

use crate::error::Result;

/// Run the self-check suite; `Ok(true)` only if every check passed.
pub fn run_check(config: &Path) -> Result<bool> {
    let settings = ConfigLocator::new(config).load()?;
    let report = SelfCheck::new(settings, CommandRunner::new()).run_all_tests();
    Ok(report.all_passed())
}
