// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit loop execution.
//!
//! ```text
//! count ---> [ stage_all -> pick -> commit -> push ] x count ---> RunSummary
//!                             |
//!                             v
//!                      MessageCatalog
//! ```
//!
//! Each iteration is strictly sequential and blocking. The first failing
//! git operation aborts the whole run with the error propagated as-is;
//! commits already pushed stay pushed.

use std::path::Path;

use anyhow::Context;
use rand::Rng;
use tracing::info;

use crate::catalog::MessageCatalog;
use crate::error::Result;
use crate::git::backend::GitMutation;

/// One full bulk-commit run against a repository.
///
/// Generic over the mutation backend so tests can substitute a scripted
/// double for the real git CLI.
pub struct CommitLoop<'a, G: GitMutation> {
    backend: &'a G,
    catalog: &'a MessageCatalog,
    repo: &'a Path,
    count: u32,
}

impl<'a, G: GitMutation> CommitLoop<'a, G> {
    #[must_use]
    pub fn new(backend: &'a G, catalog: &'a MessageCatalog, repo: &'a Path, count: u32) -> Self {
        Self {
            backend,
            catalog,
            repo,
            count,
        }
    }

    /// Run the loop to completion: stage, commit, push, `count` times.
    ///
    /// Messages are drawn from the catalog uniformly at random, with
    /// replacement. Each pushed commit is reported on stdout.
    ///
    /// # Errors
    ///
    /// Returns the first git failure, wrapped with the iteration it
    /// happened in. No rollback is attempted.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunSummary> {
        let mut messages = Vec::with_capacity(self.count as usize);

        for i in 0..self.count {
            let commit_no = i + 1;

            self.backend.stage_all(self.repo).with_context(|| {
                format!("failed to stage changes for commit {commit_no} of {}", self.count)
            })?;

            let message = self.catalog.pick(rng).to_string();
            self.backend
                .commit(self.repo, &message, true)
                .with_context(|| format!("failed to create commit {commit_no} of {}", self.count))?;

            self.backend
                .push(self.repo)
                .with_context(|| format!("failed to push commit {commit_no} of {}", self.count))?;

            println!("Committed and pushed: {message}");
            info!(
                commit = commit_no,
                total = self.count,
                message = %message,
                "Commit pushed"
            );
            messages.push(message);
        }

        Ok(RunSummary { messages })
    }
}

/// Record of a completed run, in commit order.
#[derive(Debug)]
pub struct RunSummary {
    messages: Vec<String>,
}

impl RunSummary {
    /// Number of commits created and pushed.
    #[must_use]
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// Messages in the order they were committed.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
