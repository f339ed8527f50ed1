// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation for churn-rs.
//!
//! ```text
//! preflight (gix) --> count (arg or prompt) --> catalog --> CommitLoop
//! ```
//!
//! The count is settled before the first mutating git call, so a rejected
//! count leaves the repository untouched.

use std::io::Write as _;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::catalog::MessageCatalog;
use crate::cli::run::RunArgs;
use crate::config::Config;
use crate::error::{ChurnError, ChurnResult, GitError, InputError, Result};
use crate::git::backend::ShellBackend;
use crate::git::query;
use crate::runner::CommitLoop;

/// Main handler for the run command.
///
/// # Errors
///
/// Returns an error if the current directory is not a git repository, the
/// commit count is rejected, the catalog cannot be built, or any git
/// operation in the loop fails.
pub fn run_run_command(args: &RunArgs, config: &Config) -> Result<()> {
    let repo = std::env::current_dir().context("failed to determine current directory")?;
    preflight(&repo)?;

    let count = match args.count {
        Some(value) => validate_commit_count(value).map_err(ChurnError::from)?,
        None => prompt_commit_count()?,
    };

    let catalog = MessageCatalog::from_config(&config.messages)?;
    info!(count, messages = catalog.len(), "Starting commit run");

    let backend = ShellBackend;
    let summary = CommitLoop::new(&backend, &catalog, &repo, count).run(&mut rand::rng())?;

    println!("Successfully created {} commits.", summary.count());
    Ok(())
}

/// Repository checks that run before the user is asked for anything.
fn preflight(repo: &Path) -> ChurnResult<()> {
    if !query::is_git_repo(repo) {
        return Err(GitError::RepoNotFound {
            path: repo.display().to_string(),
        }
        .into());
    }

    match query::current_branch(repo)? {
        Some(branch) => info!(branch = %branch, "Repository detected"),
        None => info!("Repository detected (detached HEAD)"),
    }

    if query::has_uncommitted_changes(repo)? {
        debug!("Work tree has pending changes, the first commit will pick them up");
    }

    Ok(())
}

/// Read the commit count from stdin.
///
/// EOF and blank input fall through to the parser and get rejected there.
fn prompt_commit_count() -> ChurnResult<u32> {
    print!("Enter the number of commits: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(parse_commit_count(&line)?)
}

/// Parse raw user input into a commit count.
fn parse_commit_count(input: &str) -> std::result::Result<u32, InputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    validate_commit_count(value)
}

/// Reject zero, negative, and oversized counts.
fn validate_commit_count(value: i64) -> std::result::Result<u32, InputError> {
    if value <= 0 {
        return Err(InputError::NotPositive { value });
    }
    u32::try_from(value).map_err(|_| InputError::OutOfRange {
        value,
        max: u32::MAX,
    })
}

#[cfg(test)]
mod tests;
