//! Terminal interaction helpers.

use dialoguer::console::{user_attended, Term};
use tracing::debug;

/// Block until the user presses a key.
///
/// Keeps the run's output readable in terminals that close when the
/// process exits (double-clicked launchers, transient shells). Skipped
/// when stdin is not an interactive terminal, so piped and CI runs never
/// hang here.
pub fn pause_for_keypress() {
    if !user_attended() {
        debug!("not attached to a terminal; skipping pause");
        return;
    }

    println!();
    println!("Press any key to close...");
    let _ = Term::stdout().read_key();
}
