// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git access, split into a read side and a write side.
//!
//! ```text
//!   read side (preflight)       write side (commit loop)
//!   ---------------------       ------------------------
//!   query.rs free functions     runner::CommitLoop
//!            |                            |
//!      GitQuery trait             GitMutation trait
//!            |                            |
//!       GixBackend                  ShellBackend
//!      in-process gix              git subprocess
//!      is_repo, branch,            stage_all, commit,
//!      uncommitted                 push
//! ```
//!
//! **`GixBackend`** answers read-only queries in pure Rust with no
//! subprocess. **`ShellBackend`** shells out to the git CLI for everything
//! that rewrites history, so hooks and credential helpers behave as they do
//! for a manual commit.

pub mod backend;
pub mod query;
