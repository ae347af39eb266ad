//! Static file contents written into a new repository

/// Ignore patterns for common build, editor and OS artifacts.
pub const GITIGNORE: &str = "# macOS
.DS_Store
.AppleDouble
.LSOverride

# Node.js
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Python
__pycache__/
*.py[cod]
*.pyo
*.pyd
.Python
env/
venv/
ENV/

# VSCode
.vscode/

# JetBrains IDEs
.idea/
*.iml

# Logs
logs/
*.log

# Environment files
.env
.env.*

# Build output
dist/
build/

# Misc
*.swp
*~
";

/// Message of the single commit created by the initializer.
pub const FIRST_COMMIT_MESSAGE: &str = "first commit";

/// Name of the remote the new branch is pushed to.
pub const REMOTE_NAME: &str = "origin";

/// README body: a single top-level heading.
pub fn readme(repo_name: &str) -> String {
    format!("# {}\n", repo_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_is_a_single_heading() {
        assert_eq!(readme("demo"), "# demo\n");
    }

    #[test]
    fn gitignore_covers_common_artifacts() {
        for pattern in [".DS_Store", "node_modules/", "__pycache__/", ".idea/", ".env", "dist/"] {
            assert!(
                GITIGNORE.lines().any(|line| line == pattern),
                "missing pattern {}",
                pattern
            );
        }
        assert!(GITIGNORE.ends_with('\n'));
    }
}
