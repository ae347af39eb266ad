//! Repository name validation
//!
//! The name becomes a directory, a `git` argument and part of a remote URL,
//! so it is restricted to the characters GitHub itself accepts.

use crate::{Error, Result};

/// Longest name GitHub accepts for a repository.
pub const MAX_NAME_LEN: usize = 100;

/// Validate a user-supplied repository name.
///
/// Accepts ASCII letters, digits, `-`, `_` and `.`. Rejects empty names,
/// `.`/`..`, names starting with `-`, and names longer than
/// [`MAX_NAME_LEN`].
pub fn validate_repo_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidRepoName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name is longer than 100 characters"));
    }
    if name.starts_with('-') {
        return Err(invalid("name must not start with '-'"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name must not be '.' or '..'"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("character '{}' is not allowed", c)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("demo")]
    #[case("my_new_project")]
    #[case("repo-2")]
    #[case("dotted.name")]
    #[case("A")]
    #[case(".github")]
    #[case(".dotfiles")]
    fn accepts_valid_names(#[case] name: &str) {
        assert!(validate_repo_name(name).is_ok(), "{} should be valid", name);
    }

    #[rstest]
    #[case("", "empty")]
    #[case(".", "'.'")]
    #[case("..", "'.'")]
    #[case("-rf", "'-'")]
    #[case("a b", "' '")]
    #[case("a/b", "'/'")]
    #[case("x;rm", "';'")]
    #[case("naïve", "'ï'")]
    fn rejects_invalid_names(#[case] name: &str, #[case] reason_fragment: &str) {
        let err = validate_repo_name(name).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains(reason_fragment),
            "error for {:?} should mention {}, got: {}",
            name,
            reason_fragment,
            message
        );
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert!(validate_repo_name(&name).is_err());
        assert!(validate_repo_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
    }
}
