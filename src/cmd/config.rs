// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `options` and `configs` introspection commands.

use crate::config::Config;

/// Print every option as an aligned `key = value` line.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Print the loader journal produced by `format_loaded_files`.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No config files loaded");
        return;
    }
    for line in config_files {
        println!("{line}");
    }
}
