// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console and file logging built on `tracing`.
//!
//! ```text
//! LogConfig { console_level, file_level, log_file }
//!     |
//!     v
//! init_logging
//!     |-- stdout layer: ANSI, filtered by console_level
//!     '-- file layer (only when log_file is set):
//!         non-blocking writer, span close events,
//!         filtered by file_level
//!     |
//!     v
//! LogGuard: hold until exit, flushes the file writer on drop
//! ```
//!
//! Levels run 0-6: silent, error, warn, info, debug, trace, dump. The count
//! prompt and the per-commit report lines stay on plain stdout; tracing
//! carries the diagnostics around them.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity on a 0-6 scale, as written in config files and CLI flags.
///
/// 6 (dump) maps to trace like 5 but is kept distinct so a config can ask
/// for "everything including library internals" without inventing numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// Validating constructor.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if level > 6 {
            return Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            });
        }
        Ok(Self(level))
    }

    /// Non-failing variant of [`new`](Self::new).
    #[must_use]
    pub fn from_u8(level: u8) -> Option<Self> {
        (level <= 6).then_some(Self(level))
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// The `EnvFilter` directive this level selects.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// What `init_logging` should set up.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    /// No file layer at all when unset.
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    /// Whether console lines carry the module path.
    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Keeps the non-blocking file writer alive; dropping it flushes pending
/// writes, so it must live until the process is done logging.
pub struct LogGuard {
    _flush_guard: Option<WorkerGuard>,
}

/// Install the global tracing subscriber.
///
/// Call once, early in `main`, and keep the returned guard in scope for the
/// rest of the program.
///
/// # Errors
///
/// Fails when the log file or its parent directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use churn_rs::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::DEBUG)
///     .with_log_file("churn.log".to_string())
///     .build();
/// let _guard = init_logging(&config)?;
/// tracing::debug!("logging ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut flush_guard = None;

    let file_layer = match config.log_file() {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            flush_guard = Some(guard);

            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(EnvFilter::new(config.file_level().filter_directive())),
            )
        }
        None => None,
    };

    let console_layer = fmt::layer()
        .with_ansi(true)
        .with_target(config.show_target())
        .with_filter(EnvFilter::new(config.console_level().filter_directive()));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(LogGuard {
        _flush_guard: flush_guard,
    })
}

#[cfg(test)]
mod tests;
