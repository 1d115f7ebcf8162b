//! Git metadata for the release being prepared.
//!
//! All functions shell out to `git` via `std::process::Command`. The release
//! branch is recovered from HEAD's ref decorations, which is a hard
//! precondition: the tool must run on a checkout of a `release_<version>`
//! branch.

use std::path::Path;
use std::process::Command;
use regex::Regex;
use thiserror::Error;

/// Failures while resolving git metadata.
#[derive(Error, Debug)]
pub enum GitError {
    /// `git` itself could not be executed.
    #[error("failed to execute git: {0}")]
    Exec(#[from] std::io::Error),

    /// A git command ran but exited unsuccessfully.
    #[error("git {command} failed: {stderr}")]
    Failed {
        /// The git subcommand and arguments.
        command: String,
        /// Trimmed stderr from git.
        stderr: String,
    },

    /// Git produced output that was not valid UTF-8.
    #[error("git output was not valid UTF-8")]
    Encoding,

    /// HEAD's ref decorations contain no `release_<version>` branch name.
    #[error("expected a branch name of the form release_<version>, got `{decorations}`")]
    NoReleaseBranch {
        /// The decoration string that was searched.
        decorations: String,
    },
}

/// Run a git command in `repo` and return its stdout.
fn git_output(repo: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git").arg("-C").arg(repo).args(args).output()?;
    if !output.status.success() {
        return Err(GitError::Failed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    String::from_utf8(output.stdout).map_err(|_| GitError::Encoding)
}

/// Full hash of HEAD in the repository at `repo`.
pub fn head_commit(repo: &Path) -> Result<String, GitError> {
    let out = git_output(repo, &["rev-parse", "HEAD"])?;
    Ok(out.trim().to_string())
}

/// Release branch name extracted from HEAD's ref decorations in `repo`.
pub fn release_branch(repo: &Path) -> Result<String, GitError> {
    let decorations = git_output(repo, &["log", "-n", "1", "--pretty=%d", "HEAD"])?;
    extract_release_branch(&decorations)
}

/// Find the first `release_<dotted-numeric>` substring in a decoration list
/// such as `(HEAD, tag: v1.7.0, release_1.7.0)`.
fn extract_release_branch(decorations: &str) -> Result<String, GitError> {
    let re = Regex::new(r"release_[0-9.]+").unwrap();
    re.find(decorations)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| GitError::NoReleaseBranch {
            decorations: decorations.trim().to_string(),
        })
}

/// Everything about the release that is resolved once at startup and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    /// Release version being prepared, e.g. `1.7.0`.
    pub version: String,
    /// Full commit hash of HEAD.
    pub commit: String,
    /// Release branch name, e.g. `release_1.7.0`.
    pub branch: String,
}

impl ReleaseContext {
    /// Resolve commit hash and branch name from the repository at `repo`.
    pub fn resolve(version: &str, repo: &Path) -> Result<Self, GitError> {
        Ok(Self {
            version: version.to_string(),
            commit: head_commit(repo)?,
            branch: release_branch(repo)?,
        })
    }
}
