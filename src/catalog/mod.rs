// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message catalog.
//!
//! ```text
//! built-in table ---\
//! messages.file  ----+--> MessageCatalog --> pick(rng) --> &str
//! messages.extra ---/      (immutable,
//!                           never empty)
//! ```
//!
//! The catalog is assembled once at startup and never mutated afterwards.
//! Every constructor enforces the two invariants selection relies on: at
//! least one entry, and no blank entries.

use std::path::Path;

use rand::Rng;

use crate::config::types::MessagesConfig;
use crate::error::{CatalogError, ChurnResult, ConfigError};

/// Built-in commit messages, grouped by theme.
static DEFAULT_MESSAGES: &[&str] = &[
    // Features
    "Add user profile settings page",
    "Implement search with debounced input",
    "Add pagination to results view",
    "Wire up notification preferences endpoint",
    "Add dark mode toggle",
    "Implement CSV export for reports",
    "Add keyboard shortcuts for common actions",
    "Introduce feature flag for new dashboard",
    "Add avatar upload with size validation",
    "Implement password strength meter",
    "Add session timeout warning dialog",
    "Support drag and drop file upload",
    "Add inline editing for list items",
    "Implement breadcrumb navigation",
    "Add rate limiting to login endpoint",
    "Cache expensive lookups in memory",
    "Add retry logic for flaky upstream calls",
    "Implement soft delete for user records",
    // Fixes
    "Fix off-by-one in pagination counter",
    "Fix race condition in session refresh",
    "Handle empty response from profile service",
    "Fix broken redirect after logout",
    "Correct timezone handling in audit log",
    "Fix memory leak in event listener cleanup",
    "Guard against missing config values",
    "Fix duplicate submission on double click",
    "Normalize line endings in importer",
    "Fix crash on malformed avatar image",
    "Escape user input in search results",
    "Fix flaky scroll restoration on back navigation",
    // Docs
    "Update README with setup instructions",
    "Document environment variables",
    "Add architecture overview to docs",
    "Clarify contribution guidelines",
    "Add changelog entry for release",
    "Document rate limit behavior",
    "Fix typos across documentation",
    "Add usage examples to API docs",
    // Tests and chores
    "Add unit tests for validation helpers",
    "Add integration test for login flow",
    "Increase coverage for error paths",
    "Remove dead code from legacy importer",
    "Bump dependencies to latest minor versions",
    "Clean up unused imports",
    "Rename ambiguous helper functions",
    "Extract shared logic into utility module",
    "Simplify nested conditionals in router",
    "Migrate deprecated API calls",
    "Tighten lint configuration",
    "Pin CI toolchain version",
];

/// Ordered, non-empty, immutable set of candidate commit messages.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: Vec<String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCatalog {
    /// Catalog with the built-in message table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Catalog from explicit messages, preserving order and duplicates.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::BlankMessage` for any whitespace-only entry.
    pub fn from_messages(messages: Vec<String>) -> ChurnResult<Self> {
        if messages.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        for (i, message) in messages.iter().enumerate() {
            if message.trim().is_empty() {
                return Err(CatalogError::BlankMessage { index: i + 1 }.into());
            }
        }
        Ok(Self { messages })
    }

    /// Catalog as configured: `messages.file` replaces the built-in table,
    /// `messages.extra` entries are appended after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be read or the
    /// resulting catalog would be invalid.
    pub fn from_config(messages: &MessagesConfig) -> ChurnResult<Self> {
        let mut combined = match &messages.file {
            Some(path) => Self::from_file(path)?.messages,
            None => DEFAULT_MESSAGES.iter().map(ToString::to_string).collect(),
        };
        combined.extend(messages.extra.iter().cloned());
        Self::from_messages(combined)
    }

    /// Catalog from a file with one message per line.
    ///
    /// Lines are trimmed and blank lines skipped.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ReadError` if the file cannot be read and
    /// `CatalogError::Empty` if no messages remain after trimming.
    pub fn from_file(path: &Path) -> ChurnResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let messages: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();

        if messages.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        Ok(Self { messages })
    }

    /// Select one message uniformly at random, with replacement.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.messages.len());
        &self.messages[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for a constructed catalog; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }
}
