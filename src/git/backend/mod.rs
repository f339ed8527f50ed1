// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The two git backends and the traits that split read from write.
//!
//! ```text
//! preflight ---- GitQuery ----> GixBackend    (in-process, gix)
//! commit loop -- GitMutation -> ShellBackend  (subprocess, git CLI)
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{ChurnResult, GitError, GixError, ProcessError};

// --- Read Side ---

/// Repository state inspection. Nothing here may modify the repository.
pub trait GitQuery {
    /// Whether `path` is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// The checked-out branch name, `None` on a detached HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the repository cannot be discovered or the
    /// head reference cannot be resolved.
    fn current_branch(path: &Path) -> ChurnResult<Option<String>>;

    /// Whether the work tree has staged, unstaged, or untracked files.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the repository cannot be discovered or the
    /// status walk fails.
    fn has_uncommitted_changes(path: &Path) -> ChurnResult<bool>;
}

// --- Write Side ---

/// The full write surface of the commit loop: stage everything, commit,
/// push. Methods take `&self` so the loop can run against a scripted double
/// instead of the real CLI.
pub trait GitMutation {
    /// Stage all changes in the work tree (`git add .`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the add operation fails.
    fn stage_all(&self, repo_path: &Path) -> ChurnResult<()>;

    /// Create a commit with the given message.
    ///
    /// The message is passed through as a single argument, never split.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit operation fails.
    fn commit(&self, repo_path: &Path, message: &str, allow_empty: bool) -> ChurnResult<()>;

    /// Push to the default remote of the current branch (`git push`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push operation fails, including when no
    /// upstream is configured.
    fn push(&self, repo_path: &Path) -> ChurnResult<()>;
}

// --- GixBackend ---

/// In-process backend over gix, used for the run preflight.
pub struct GixBackend;

impl GixBackend {
    fn discover(path: &Path) -> ChurnResult<gix::Repository> {
        Ok(gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?)
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> ChurnResult<Option<String>> {
        let head = Self::discover(path)?
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(path: &Path) -> ChurnResult<bool> {
        use gix::status::UntrackedFiles;

        let repo = Self::discover(path)?;

        // a single status entry is enough, stop the walk there
        let first_entry = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "could not start status walk".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "status walk failed".to_string(),
            })?
            .next();

        Ok(first_entry.is_some())
    }
}

// --- ShellBackend ---

/// Subprocess backend over the git CLI.
///
/// Everything that rewrites history goes through the real git binary, so
/// hooks, commit signing, and credential helpers behave exactly as they
/// would for a manual commit.
pub struct ShellBackend;

impl ShellBackend {
    /// PATH lookup for git, done once per process.
    fn git_executable() -> ChurnResult<&'static Path> {
        static GIT_EXE: OnceLock<Option<PathBuf>> = OnceLock::new();

        GIT_EXE
            .get_or_init(|| which::which("git").ok())
            .as_deref()
            .ok_or_else(|| {
                ProcessError::ExecutableNotFound {
                    name: "git".to_string(),
                }
                .into()
            })
    }

    /// Run git with `args`, returning trimmed stdout.
    ///
    /// `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` make credential
    /// prompts fail instead of waiting on input that never comes.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> ChurnResult<String> {
        use std::process::Command;

        let git = Self::git_executable()?;
        let output = Command::new(git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| ProcessError::SpawnFailed {
                command: format!("git {}", args.join(" ")),
                source: e,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitMutation for ShellBackend {
    fn stage_all(&self, repo_path: &Path) -> ChurnResult<()> {
        Self::git_command(&["add", "."], repo_path)?;
        Ok(())
    }

    fn commit(&self, repo_path: &Path, message: &str, allow_empty: bool) -> ChurnResult<()> {
        let mut args = vec!["commit"];
        if allow_empty {
            args.push("--allow-empty");
        }
        args.extend(&["-m", message]);
        Self::git_command(&args, repo_path)?;
        Ok(())
    }

    fn push(&self, repo_path: &Path) -> ChurnResult<()> {
        Self::git_command(&["push"], repo_path)?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }

    fn current_branch(path: &Path) -> ChurnResult<Option<String>> {
        // symbolic-ref exits non-zero on a detached HEAD
        Ok(Self::git_command(&["symbolic-ref", "--short", "HEAD"], path).ok())
    }

    fn has_uncommitted_changes(path: &Path) -> ChurnResult<bool> {
        let output = Self::git_command(&["status", "--porcelain"], path)?;
        Ok(!output.is_empty())
    }
}

#[cfg(test)]
mod tests;
