//! One-shot stage + commit + push for a git working tree.
//!
//! The binary resolves a commit message from its arguments, stages every
//! change, commits, and pushes to `origin/master` with upstream tracking.

pub mod cli;
pub mod git;
pub mod util;
