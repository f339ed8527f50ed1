// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `Config` tree and how it is assembled.
//!
//! ```text
//! Priority (low to high)
//! 1. serde defaults
//! 2. local churn.toml (cwd)
//! 3. --config FILE(s)
//! 4. CHURN_* env vars (opt-in via loader)
//! 5. --set overrides
//! ```
//!
//! With no file present every default matches the built-in behavior: console
//! logging at info, no log file, built-in message catalog.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, MessagesConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Commit message catalog options.
    pub messages: MessagesConfig,
}

impl Config {
    /// Start a [`ConfigLoader`] for multi-source loading.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use churn_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("churn.toml")
    ///     .with_env_prefix("CHURN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Shortcut for loading exactly one TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, is not valid TOML, or does not
    /// deserialize into [`Config`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Shortcut for loading from in-memory TOML.
    ///
    /// # Errors
    ///
    /// Fails when the content is not valid TOML or does not deserialize into
    /// [`Config`].
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate configuration values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the messages section references an empty file path
    /// or contains a blank extra entry.
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.messages.file
            && file.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                section: "messages".to_string(),
                key: "file".to_string(),
                message: "path must not be empty".to_string(),
            }
            .into());
        }

        for (i, message) in self.messages.extra.iter().enumerate() {
            if message.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "messages".to_string(),
                    key: "extra".to_string(),
                    message: format!("entry {} is blank", i + 1),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Every option as an aligned `key = value` line, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.extend(self.global_options());
        options.extend(self.messages_options());

        let width = options.keys().map(String::len).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(options.len());
        for (key, value) in options {
            lines.push(format!("{key:<width$} = {value}"));
        }
        lines
    }

    fn global_options(&self) -> [(String, String); 3] {
        [
            (
                "global.output_log_level".into(),
                self.global.output_log_level.as_u8().to_string(),
            ),
            (
                "global.file_log_level".into(),
                self.global.file_log_level.as_u8().to_string(),
            ),
            (
                "global.log_file".into(),
                self.global.log_file.display().to_string(),
            ),
        ]
    }

    fn messages_options(&self) -> [(String, String); 2] {
        [
            (
                "messages.file".into(),
                self.messages
                    .file
                    .as_ref()
                    .map_or_else(String::new, |p| p.display().to_string()),
            ),
            ("messages.extra".into(), self.messages.extra.join(", ")),
        ]
    }
}
