//! Orchestration and self-checks for init-repo
//!
//! `repo-core` composes the leaf crates into the two things the tool does:
//!
//! - **Initialization**: create the remote repository, then the matching
//!   local working copy ([`RepoInitializer`])
//! - **Self-checks**: verify settings, API access, `git` and SSH before a
//!   real run ([`SelfCheck`])
//!
//! ```text
//!                      repo-cli
//!                          |
//!                      repo-core
//!                          |
//!          +---------------+---------------+
//!          |               |               |
//!       repo-fs        repo-remote      repo-git
//! ```

pub mod checks;
pub mod error;
pub mod initializer;

pub use checks::{
    CheckKind, CheckResult, SelfCheck, SuiteReport, TransportVerdict, classify_transport_probe,
    run_checks,
};
pub use error::{Error, Result};
pub use initializer::{InitReport, RepoInitializer};
