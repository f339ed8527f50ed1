// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! serde defaults < churn.toml < --config files < env (opt-in) < --set
//! ```
//!
//! Sources queue up in a [`ConfigLoader`]; nothing is read until `build`,
//! which merges, deserializes and validates in one step. Every file source
//! is journaled so the `configs` command can list what was read.

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// Accumulates configuration sources for a single [`build`](Self::build).
///
/// Later sources win; `set` overrides beat every file and the environment.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    journal: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            journal: Vec::new(),
        }
    }

    /// Queue a TOML file that must exist when `build` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        let file = File::from(path).format(FileFormat::Toml).required(true);
        self.builder = self.builder.add_source(file);
        self.journal.push(("file".to_string(), path.to_path_buf()));
        self
    }

    /// Queue a TOML file that is skipped when absent.
    ///
    /// Absent files stay out of the journal, so the `configs` command only
    /// lists files that were actually read.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        let file = File::from(path).format(FileFormat::Toml).required(false);
        self.builder = self.builder.add_source(file);
        if path.exists() {
            self.journal
                .push(("optional".to_string(), path.to_path_buf()));
        }
        self
    }

    /// Queue literal TOML content.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        let source = File::from_str(content, FileFormat::Toml);
        self.builder = self.builder.add_source(source);
        self.journal
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Layer `PREFIX_SECTION_KEY` environment variables over the files,
    /// e.g. `CHURN_MESSAGES_FILE=my.txt` sets `messages.file`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Force a single dotted-path value, e.g. `global.output_log_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value cannot be represented as a
    /// configuration override.
    pub fn set(mut self, key: &str, value: impl Into<config::Value>) -> Result<Self> {
        let overridden = self.builder.set_override(key, value);
        self.builder = overridden.map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Merge every queued source into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error when a required file is missing or unparseable, when
    /// the merged tree does not deserialize into [`Config`], or when
    /// [`Config::validate`] rejects a value.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            let env = Environment::with_prefix(prefix)
                .separator("_")
                .try_parsing(true);
            builder = builder.add_source(env);
        }
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The `(source kind, path)` pairs recorded so far, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.journal.clone()
    }

    /// Journal rendered as numbered `N. [kind] path` lines.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.journal.len());
        for (i, (source, path)) in self.journal.iter().enumerate() {
            lines.push(format!("{}. [{}] {}", i + 1, source, path.display()));
        }
        lines
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
