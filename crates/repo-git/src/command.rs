//! External command execution
//!
//! A thin synchronous wrapper around `std::process::Command`: no timeout,
//! no streaming, output fully buffered.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command counts as successful under the requested mode
    pub success: bool,
    /// Raw exit code; `None` if the process never ran or was killed by a signal
    pub code: Option<i32>,
    /// Trimmed standard output
    pub stdout: String,
    /// Trimmed standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process ran and exited with status zero.
    pub fn exited_zero(&self) -> bool {
        self.code == Some(0)
    }

    /// The most useful single line of diagnostics for an error message.
    pub fn diagnostic(&self) -> String {
        let text = if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        match (text.is_empty(), self.code) {
            (false, _) => text.clone(),
            (true, Some(code)) => format!("exited with status {}", code),
            (true, None) => "terminated without an exit status".to_string(),
        }
    }
}

/// Runs external programs with a fixed set of extra environment variables.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    envs: Vec<(OsString, OsString)>,
}

impl CommandRunner {
    /// Create a runner that passes the parent environment through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable to every command this runner spawns.
    pub fn with_env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    /// Run `program` with `args`, optionally inside `cwd`.
    ///
    /// With `check` set, a non-zero exit is reported as `success = false`
    /// and logged as an error. Without it, `success` is true whenever the
    /// process ran and the caller interprets `code` and the streams. A
    /// spawn failure is `success = false` in both modes.
    pub fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>, check: bool) -> CommandOutput {
        let command_line = display_command(program, args);
        tracing::debug!(command = %command_line, cwd = ?cwd, "Running command");

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::error!(command = %command_line, error = %e, "Failed to start command");
                return CommandOutput {
                    success: false,
                    code: None,
                    stdout: String::new(),
                    stderr: e.to_string(),
                };
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code();

        tracing::debug!("Command output: {}", stdout);
        if !stderr.is_empty() {
            tracing::debug!("Command stderr: {}", stderr);
        }

        let success = if check {
            output.status.success()
        } else {
            true
        };

        if !success {
            tracing::error!("Command failed: {}", command_line);
            tracing::error!("Exit code: {:?}", code);
            tracing::error!("Stdout: {}", stdout);
            tracing::error!("Stderr: {}", stderr);
        }

        CommandOutput {
            success,
            code,
            stdout,
            stderr,
        }
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
