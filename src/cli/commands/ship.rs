//! Ship command implementation
//!
//! Runs the whole stage -> commit -> push sequence against the current
//! working directory, then pauses for a keypress in interactive
//! terminals.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::output::Output;
use crate::git::{self, CommitOutcome};
use crate::util::term;

/// Message used when the invocation carries no message text.
pub const DEFAULT_MESSAGE: &str = "latest updates";

/// Remote every push targets.
pub const REMOTE: &str = "origin";

/// Branch every push targets; recorded as upstream on success.
pub const BRANCH: &str = "master";

/// Run the ship command.
///
/// The pause runs even when a step failed, so the diagnostics stay
/// visible in terminals that close on process exit. The exit code
/// reflects the push outcome; a skipped commit never fails the run.
pub fn run_ship(args: &[String]) -> ExitCode {
    let result = ship(args);

    if let Err(e) = &result {
        Output::error(&format!("{e:#}"));
    }

    term::pause_for_keypress();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn ship(args: &[String]) -> anyhow::Result<()> {
    if which::which("git").is_err() {
        anyhow::bail!("git executable not found in PATH");
    }

    let cwd = std::env::current_dir()?;
    let message = resolve_message(args);
    debug!(%message, "resolved commit message");

    Output::header("Staging changes...");
    git::stage_all(&cwd)?;

    Output::header(&format!("Committing (\"{}\")...", message));
    match git::commit(&cwd, &message)? {
        CommitOutcome::Created => {}
        CommitOutcome::Skipped => {
            Output::info("Nothing to commit or commit skipped; continuing.");
        }
    }

    Output::header("Pushing...");
    let spinner = Output::spinner(&format!("Pushing to {}/{}...", REMOTE, BRANCH));
    let pushed = git::push_set_upstream(&cwd, REMOTE, BRANCH);
    spinner.finish_and_clear();
    pushed?;

    Output::success(&format!("Pushed to {}/{} and set upstream.", REMOTE, BRANCH));
    Ok(())
}

/// Join invocation arguments with single spaces into the commit message.
///
/// An empty join result (no arguments, or only empty tokens) falls back
/// to [`DEFAULT_MESSAGE`]. Non-empty results are used exactly as joined,
/// internal spacing included.
pub fn resolve_message(args: &[String]) -> String {
    let joined = args.join(" ");
    if joined.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        joined
    }
}
