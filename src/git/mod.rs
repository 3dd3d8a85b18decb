//! Git operations wrapper
//!
//! Shells out to the `git` CLI for every operation; each call is an
//! opaque blocking subprocess. All functions take the working directory
//! explicitly so callers and tests never depend on process-wide state.

use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

use crate::util::log_cmd;

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Outcome of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new revision was created.
    Created,
    /// Git exited non-zero, typically because the index was empty.
    Skipped,
}

/// Stage every working-tree change (`git add -A`).
///
/// Stdio is inherited so git's own diagnostics reach the user, and the
/// exit status is deliberately ignored: a failed stage never stops the
/// run.
pub fn stage_all(dir: &Path) -> Result<(), GitError> {
    let mut cmd = Command::new("git");
    cmd.args(["add", "-A"]).current_dir(dir);
    log_cmd(&cmd);
    let status = cmd.status()?;

    if !status.success() {
        debug!(code = ?status.code(), "git add exited non-zero; continuing");
    }

    Ok(())
}

/// Commit staged changes (`git commit -m <message>`).
///
/// Output is suppressed: the common failure here is an empty index, and
/// git's "nothing to commit" text is noise for this tool. A non-zero
/// exit maps to [`CommitOutcome::Skipped`] rather than an error.
pub fn commit(dir: &Path, message: &str) -> Result<CommitOutcome, GitError> {
    let mut cmd = Command::new("git");
    cmd.args(["commit", "-m", message])
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    log_cmd(&cmd);
    let status = cmd.status()?;

    if status.success() {
        Ok(CommitOutcome::Created)
    } else {
        debug!(code = ?status.code(), "git commit exited non-zero");
        Ok(CommitOutcome::Skipped)
    }
}

/// Push a branch and record it as upstream (`git push -u <remote> <branch>`).
pub fn push_set_upstream(dir: &Path, remote: &str, branch: &str) -> Result<(), GitError> {
    let mut cmd = Command::new("git");
    cmd.args(["push", "-u", remote, branch]).current_dir(dir);
    log_cmd(&cmd);
    let output = cmd.output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::OperationFailed(interpret_push_error(&stderr)));
    }

    Ok(())
}

/// Interpret common git push errors into user-friendly messages
fn interpret_push_error(stderr: &str) -> String {
    let lower = stderr.to_lowercase();
    if lower.contains("non-fast-forward") {
        return format!(
            "Push rejected: remote has changes. Pull first, then try again.\n\
             (Original: {})",
            stderr.trim()
        );
    }
    if lower.contains("could not read from remote") || lower.contains("repository not found") {
        return format!(
            "Cannot reach remote. Check your network connection and repository URL.\n\
             (Original: {})",
            stderr.trim()
        );
    }
    if lower.contains("permission denied") || lower.contains("authentication failed") {
        return format!(
            "Authentication failed. Refresh your credentials and try again.\n\
             (Original: {})",
            stderr.trim()
        );
    }
    stderr.to_string()
}
