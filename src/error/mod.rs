// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types for the whole crate.
//!
//! ```text
//!             ChurnError (16 bytes)
//!                    |
//!    +------+------+------+------+------+
//!    |      |      |      |      |      |
//!    v      v      v      v      v      v
//!  Input   Git  Config Catalog Process  Io
//!   Box    Box    Box    Box     Box   Box
//!
//! Payloads by domain:
//!   Input    NotANumber, NotPositive, OutOfRange
//!   Git      RepoNotFound, CommandFailed, Gix
//!   Config   ReadError, InvalidValue
//!   Catalog  Empty, BlankMessage
//!   Process  ExecutableNotFound, SpawnFailed
//! ```
//!
//! Every variant boxes its payload, so passing a `ChurnError` around costs a
//! tag and a pointer. Functions with one obvious failure domain return
//! [`ChurnResult`]; everything that crosses domains uses the anyhow-based
//! [`Result`] and `.context()`.

use thiserror::Error;

/// Alias for `anyhow::Result`, the cross-domain result type.
pub type Result<T> = anyhow::Result<T>;

/// Result of operations with a single [`ChurnError`] failure domain.
pub type ChurnResult<T> = std::result::Result<T, ChurnError>;

/// Top-level error, one variant per failure domain.
#[derive(Debug, Error)]
pub enum ChurnError {
    /// Interactive or command-line input was rejected.
    #[error("input error: {0}")]
    Input(#[from] Box<InputError>),

    /// Anything from the git layer, shell or gix.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    #[error("catalog error: {0}")]
    Catalog(#[from] Box<CatalogError>),

    /// A subprocess could not be found or spawned.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- Boxing Conversions ---

/// Generates the `From` impls that box a sub-error into its variant, so call
/// sites can use `?` without writing `Box::new`.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ChurnError {
                fn from(err: $error) -> Self {
                    ChurnError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    InputError => Input,
    GitError => Git,
    ConfigError => Config,
    CatalogError => Catalog,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Input Domain ---

/// Rejected commit counts.
///
/// The count is refused before any git invocation happens, so none of these
/// leave side effects behind.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input could not be parsed as an integer.
    #[error("invalid input '{input}': expected an integer")]
    NotANumber { input: String },

    /// Parsed integer is zero or negative.
    #[error("number of commits must be positive, got {value}")]
    NotPositive { value: i64 },

    /// Parsed integer exceeds the supported maximum.
    #[error("number of commits {value} is too large (max {max})")]
    OutOfRange { value: i64, max: u32 },
}

// --- Gix Layer ---

/// In-process repository access failures, one variant per gix error type the
/// queries can surface. The fat gix errors stay boxed.
#[derive(Debug, Error)]
pub enum GixError {
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Domain ---

/// Failures of git operations, whether in-process or via the CLI.
#[derive(Debug, Error)]
pub enum GitError {
    /// The directory is not inside any git work tree.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// A git subprocess exited non-zero; `message` carries its stderr.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Domain ---

/// Configuration failures beyond what the config crate reports itself.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file referenced by the configuration could not be read.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A value parsed fine but fails validation.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Catalog Domain ---

/// Rejected message catalogs. A catalog that constructs successfully is
/// non-empty with no blank entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("message catalog is empty")]
    Empty,

    /// `index` is 1-based, matching how the entry appears in a config file.
    #[error("message catalog entry {index} is blank")]
    BlankMessage { index: usize },
}

// --- Process Domain ---

/// Failures before a subprocess produces an exit status.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
