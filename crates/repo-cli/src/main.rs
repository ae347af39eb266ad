//! init-repo CLI
//!
//! Creates a GitHub repository and a matching local working copy, or runs
//! the self-check suite with `--test`.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;
use std::path::Path;
use std::process::exit;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use repo_fs::constants::LOG_FILE;

use cli::{Action, Cli};
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, Path::new(LOG_FILE)) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    install_panic_hook();

    if let Err(e) = ctrlc::set_handler(|| {
        println!();
        println!("{} Operation cancelled by user", "✗".red());
        exit(1);
    }) {
        tracing::warn!(error = %e, "Could not install Ctrl-C handler");
    }

    match run(&cli) {
        Ok(true) => exit(0),
        Ok(false) => exit(1),
        Err(e) => {
            println!("{} An error occurred: {}", "✗".red(), e);
            tracing::error!("Unhandled error: {:?}", e);
            exit(1);
        }
    }
}

/// Log a panic as an unhandled error and exit 1 like any other failure.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Unhandled panic: {}", info);
        let _ = writeln!(std::io::stderr(), "✗ An error occurred: {}", info);
        exit(1);
    }));
}

fn run(cli: &Cli) -> Result<bool> {
    match cli.action() {
        Action::SelfCheck => commands::run_check(&cli.config),
        Action::Create(name) => {
            let cwd = std::env::current_dir()?;
            commands::run_create(&cli.config, &cwd, &name)
        }
        Action::Usage => {
            Cli::command().print_help()?;
            Ok(false)
        }
    }
}
