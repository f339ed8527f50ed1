// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options shared by every command.
//!
//! The log flags and `--set` all funnel into `to_config_overrides`, which
//! turns them into dotted `section.key=value` pairs applied after every
//! config file. CLI flags therefore always win over files.

use std::path::PathBuf;

use clap::Args;

/// Options accepted in front of any command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Additional TOML config file, loaded after churn.toml.
    /// May be repeated.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level, 0-6 (silent, errors, warnings, info, debug, trace, dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub log_level: Option<u8>,

    /// Log level for the log file; defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub file_log_level: Option<u8>,

    /// Write a log file at this path.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Override one config value, such as 'messages.file=my-messages.txt'.
    /// May be repeated.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Skip the churn.toml in the current directory, only use --config.
    #[arg(long = "no-default-configs")]
    pub no_default_configs: bool,
}

impl GlobalOptions {
    /// Flatten the log flags and `--set` options into override strings.
    ///
    /// `--set` values come first so the explicit log flags beat a conflicting
    /// `-s global.output_log_level=...`.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // the file level inherits -l unless given explicitly
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        overrides
    }
}
