//! Test fixtures for creating repository environments.
//!
//! Provides temporary working repositories, optionally wired to a bare
//! `file://` origin remote -- all offline.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::git_helpers;

/// A temporary git repository, cleaned up on drop.
pub struct RepoFixture {
    _root: TempDir,
    /// Path to the working repository.
    pub work: PathBuf,
    /// Path to the bare origin remote, if one was configured.
    pub remote: Option<PathBuf>,
}

impl RepoFixture {
    /// A repository with no remotes configured.
    pub fn new() -> Self {
        Self::build(false)
    }

    /// A repository with a bare `origin` remote reachable over `file://`.
    pub fn with_origin() -> Self {
        Self::build(true)
    }

    fn build(with_origin: bool) -> Self {
        let root = TempDir::new().unwrap();
        let work = root.path().join("work");
        git_helpers::init_repo(&work);

        let remote = if with_origin {
            let bare = root.path().join("remote.git");
            git_helpers::init_bare_remote(&bare);
            git_helpers::git(
                &work,
                &[
                    "remote",
                    "add",
                    "origin",
                    &format!("file://{}", bare.display()),
                ],
            );
            Some(bare)
        } else {
            None
        };

        Self {
            _root: root,
            work,
            remote,
        }
    }

    /// Write a file into the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.work.join(name), content).unwrap();
    }
}
