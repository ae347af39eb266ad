//! Configuration loading and filesystem helpers for init-repo
//!
//! Locates and parses the settings file, validates repository names and
//! provides the atomic writes used for every file the tool creates.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod name;

pub use config::{ConfigLocator, Settings, load_settings};
pub use constants::{ConfigFormat, RepoFile};
pub use error::{Error, Result};
pub use name::validate_repo_name;
