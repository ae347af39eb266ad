//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use repo_fs::constants::DEFAULT_CONFIG_FILE;

/// Initialize a new GitHub repository with local git setup
#[derive(Parser, Debug)]
#[command(name = "init-repo")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  init-repo my_new_project     # Create repository 'my_new_project'
  init-repo --test             # Run test suite
  init-repo --help             # Show this help message")]
pub struct Cli {
    /// Name of the repository to create
    pub repo_name: Option<String>,

    /// Run the test suite
    #[arg(long)]
    pub test: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelfCheck,
    Create(String),
    Usage,
}

impl Cli {
    /// `--test` wins over a repository name.
    pub fn action(&self) -> Action {
        match (&self.repo_name, self.test) {
            (_, true) => Action::SelfCheck,
            (Some(name), false) => Action::Create(name.clone()),
            (None, false) => Action::Usage,
        }
    }
}
