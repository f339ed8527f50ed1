// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The clap derive surface.
//!
//! ```text
//! churn [global options] [command]
//!   run [COUNT] | messages | options | configs | version
//! ```
//!
//! Running `churn` without a command behaves like `churn run`.

pub mod global;
pub mod run;


use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;
use crate::cli::run::RunArgs;

/// Bulk Git Commit Generator
///
/// Creates a run of commits with canned messages and pushes each one.
#[derive(Debug, Parser)]
#[command(
    name = "churn",
    author,
    version,
    about = "Bulk Git Commit Generator",
    long_about = "churn-rs Copyright (C) 2026 churn-rs contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Creates a run of commits with canned messages and pushes each\n\
                  one to the current branch's upstream.\n\n\
                  Invoking `churn` with no command prompts for the number of\n\
                  commits and runs them against the repository in the current\n\
                  directory. Do `churn run <count>` to skip the prompt. See\n\
                  `churn <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, churn will look for a `churn.toml` in the current\n\
                  directory and load it when present. Additional files can be\n\
                  specified with --config, those will be loaded afterwards and\n\
                  override the default. Use --no-default-configs to disable auto\n\
                  detection and only use --config."
)]
pub struct Cli {
    /// Options accepted in front of any command
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Absent means an interactive `run`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Creates and pushes the requested number of commits.
    Run(RunArgs),

    /// Lists the commit messages the catalog would draw from.
    Messages,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by churn.
    Configs,
}

/// Parse `std::env::args`, exiting on failure the way clap does.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse from an explicit argument list.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
