//! Shared test utilities for the init-repo workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`git`]: [`git::GitSandbox`], an isolated git environment with local
//!   bare remotes standing in for SSH-reachable ones
//! - [`http`]: [`http::MockGitHub`], a mock GitHub API for blocking clients
//! - [`settings`]: sample settings and config file writers

pub mod git;
pub mod http;
pub mod settings;
