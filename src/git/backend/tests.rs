// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::{GitMutation, GitQuery, GixBackend, ShellBackend};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Initialize a repository with user config and one empty commit so that
/// HEAD is born and further commits work without global git config.
fn init_repo_with_commit(path: &Path) {
    for args in [
        vec!["init", "--quiet"],
        vec!["config", "user.email", "test@example.com"],
        vec!["config", "user.name", "Test"],
        vec!["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
    ] {
        let output = Command::new("git")
            .args(&args)
            .current_dir(path)
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn commit_count(path: &Path) -> usize {
    let output = Command::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(path)
        .output()
        .expect("failed to run git rev-list");
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .expect("rev-list output should be a number")
}

fn last_commit_subject(path: &Path) -> String {
    let output = Command::new("git")
        .args(["log", "-1", "--pretty=%s"])
        .current_dir(path)
        .output()
        .expect("failed to run git log");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_gix_backend_is_git_repo() {
    let temp = temp_dir();
    assert!(!GixBackend::is_git_repo(temp.path()));

    gix::init(temp.path()).expect("failed to init repo");
    assert!(GixBackend::is_git_repo(temp.path()));
}

#[test]
fn test_shell_backend_is_git_repo() {
    let temp = temp_dir();
    assert!(!ShellBackend::is_git_repo(temp.path()));

    gix::init(temp.path()).expect("failed to init repo");
    assert!(ShellBackend::is_git_repo(temp.path()));
}

#[test]
fn test_backends_consistency() {
    // Both backends should agree on every query
    let temp = temp_dir();

    // Before init: both say not a repo
    assert!(!GixBackend::is_git_repo(temp.path()));
    assert!(!ShellBackend::is_git_repo(temp.path()));

    init_repo_with_commit(temp.path());
    assert!(GixBackend::is_git_repo(temp.path()));
    assert!(ShellBackend::is_git_repo(temp.path()));

    // Same branch name from gix and from the CLI
    let gix_branch = GixBackend::current_branch(temp.path()).expect("gix branch lookup failed");
    let shell_branch =
        ShellBackend::current_branch(temp.path()).expect("shell branch lookup failed");
    assert_eq!(gix_branch, shell_branch);
    assert!(gix_branch.is_some());

    // Both clean after the initial commit, both dirty after a stray file
    assert!(!GixBackend::has_uncommitted_changes(temp.path()).expect("gix status failed"));
    assert!(!ShellBackend::has_uncommitted_changes(temp.path()).expect("shell status failed"));

    std::fs::write(temp.path().join("stray.txt"), "pending").expect("failed to write file");
    assert!(GixBackend::has_uncommitted_changes(temp.path()).expect("gix status failed"));
    assert!(ShellBackend::has_uncommitted_changes(temp.path()).expect("shell status failed"));
}

#[test]
fn test_gix_current_branch_on_fresh_repo() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");

    // HEAD points at the unborn default branch, so a name is available
    // even before the first commit.
    let branch = GixBackend::current_branch(temp.path()).expect("current_branch should succeed");
    assert!(branch.is_some());
}

#[test]
fn test_gix_current_branch_outside_repo() {
    let temp = temp_dir();

    let result = GixBackend::current_branch(temp.path());
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("failed to discover repository"),
        "unexpected error: {message}"
    );
}

#[test]
fn test_gix_has_uncommitted_changes_tracks_work_tree() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let clean = GixBackend::has_uncommitted_changes(temp.path())
        .expect("status check should succeed on clean repo");
    assert!(!clean);

    std::fs::write(temp.path().join("notes.txt"), "pending").expect("failed to write file");
    let dirty = GixBackend::has_uncommitted_changes(temp.path())
        .expect("status check should succeed on dirty repo");
    assert!(dirty);
}

#[test]
fn test_shell_stage_all_and_commit() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    std::fs::write(temp.path().join("feature.txt"), "content").expect("failed to write file");

    let git = ShellBackend;
    git.stage_all(temp.path()).expect("stage_all should succeed");
    git.commit(temp.path(), "Add feature file", false)
        .expect("commit should succeed");

    assert_eq!(commit_count(temp.path()), 2);
    assert_eq!(last_commit_subject(temp.path()), "Add feature file");
}

#[test]
fn test_shell_commit_allow_empty_on_clean_tree() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let git = ShellBackend;
    git.stage_all(temp.path()).expect("stage_all should succeed");
    git.commit(temp.path(), "Record checkpoint", true)
        .expect("empty commit should succeed with allow_empty");

    assert_eq!(commit_count(temp.path()), 2);
    assert_eq!(last_commit_subject(temp.path()), "Record checkpoint");
}

#[test]
fn test_shell_commit_message_is_single_argument() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let git = ShellBackend;
    let message = "Fix race condition in session refresh";
    git.commit(temp.path(), message, true)
        .expect("commit should succeed");

    assert_eq!(last_commit_subject(temp.path()), message);
}

#[test]
fn test_shell_push_without_remote_fails() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let git = ShellBackend;
    let result = git.push(temp.path());

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("git command failed: git push"),
        "unexpected error: {message}"
    );
}

#[test]
fn test_git_command_returns_trimmed_stdout() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let output = ShellBackend::git_command(&["rev-list", "--count", "HEAD"], temp.path())
        .expect("rev-list should succeed");
    assert_eq!(output, "1");
}
