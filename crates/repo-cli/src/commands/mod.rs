//! Command implementations for repo-cli

pub mod check;
pub mod create;

pub use check::run_check;
pub use create::run_create;
