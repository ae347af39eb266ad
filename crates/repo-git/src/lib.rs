//! Git command runner and local repository setup for init-repo
//!
//! `git` is always driven as an external program with explicit argument
//! lists; nothing here goes through a shell.

pub mod command;
pub mod error;
pub mod local;
pub mod templates;

pub use command::{CommandOutput, CommandRunner};
pub use error::{Error, Result};
pub use local::{LocalInitializer, Step};
