// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary entry point: parse flags, bring up logging, dispatch.
//!
//! Logging is installed before the config files are read, so a broken
//! `churn.toml` still gets reported through a working subscriber.

use std::process::ExitCode;

use churn_rs::cli::global::GlobalOptions;
use churn_rs::cli::run::RunArgs;
use churn_rs::cli::{self, Command};
use churn_rs::cmd::config::{run_configs_command, run_options_command};
use churn_rs::cmd::messages::run_messages_command;
use churn_rs::cmd::run::run_run_command;
use churn_rs::config::Config;
use churn_rs::config::loader::ConfigLoader;
use churn_rs::logging::init_logging;
use churn_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

/// Logging comes up before any config file is read, so only the CLI flags
/// reach it; the `[global]` file values surface through `options` instead.
fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let pick = |raw: Option<u8>, fallback| raw.and_then(LogLevel::from_u8).unwrap_or(fallback);

    let console_level = pick(global.log_level, LogLevel::INFO);
    // the file level follows the console level unless set on its own
    let file_level = pick(global.file_log_level, console_level);
    let log_file = global.log_file.as_ref().map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => load_config(&cli.global).map(|c| run_options_command(&c)),
        Some(Command::Configs) => build_config_loader(&cli.global)
            .map(|loader| run_configs_command(&loader.format_loaded_files())),
        Some(Command::Messages) => {
            load_config(&cli.global).and_then(|config| run_messages_command(&config))
        }
        Some(Command::Run(args)) => {
            load_config(&cli.global).and_then(|config| run_run_command(args, &config))
        }
        // Bare `churn` runs with an interactive prompt for the count.
        None => load_config(&cli.global)
            .and_then(|config| run_run_command(&RunArgs::default(), &config)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn build_config_loader(global: &GlobalOptions) -> churn_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_configs {
        loader = loader.add_toml_file_optional("churn.toml");
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    for option in global.to_config_overrides() {
        let (key, value) = option.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("invalid option '{option}', expected 'section.key=value'")
        })?;
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> churn_rs::error::Result<Config> {
    let loader = build_config_loader(global)?;
    loader
        .build()
        .inspect_err(|e| eprintln!("Failed to load config: {e}"))
}
