// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command arguments.

use clap::Args;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Number of commits to create. Prompted for interactively when omitted.
    ///
    /// Zero and negative counts are rejected after parsing, with the same
    /// message the interactive prompt gives.
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<i64>,
}
