// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `[global]` and `[messages]` sections of `churn.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// The `[global]` section.
///
/// Unknown keys are tolerated here so a shared config can carry settings a
/// given churn version does not know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Console verbosity, 0-6.
    pub output_log_level: LogLevel,
    /// Log file verbosity, 0-6.
    pub file_log_level: LogLevel,
    /// Where `--log-file` style logging goes when enabled.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("churn.log"),
        }
    }
}

/// The `[messages]` section.
///
/// With neither field set the built-in catalog is used unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessagesConfig {
    /// File with one commit message per line, replacing the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Messages appended to the active catalog.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}
