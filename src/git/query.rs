// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries, free-function flavor.
//!
//! Thin wrappers over [`GixBackend`] for callers that do not care which
//! backend answers. The run preflight goes through these; nothing here
//! spawns a subprocess.

use std::path::Path;

use crate::error::ChurnResult;

use super::backend::{GitQuery, GixBackend};

/// Whether `path` is inside a git work tree.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// The checked-out branch name, `None` on a detached HEAD.
///
/// # Errors
///
/// Returns a `GitError` when the repository cannot be discovered or the head
/// reference cannot be resolved.
pub fn current_branch(path: &Path) -> ChurnResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Whether the work tree has staged, unstaged, or untracked files.
///
/// # Errors
///
/// Returns a `GitError` when the repository cannot be discovered or the
/// status walk fails.
pub fn has_uncommitted_changes(path: &Path) -> ChurnResult<bool> {
    GixBackend::has_uncommitted_changes(path)
}
