// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!   main.rs --- cli (clap) --- cmd (one handler per subcommand)
//!                                    |
//!          +-----------+------------+------------+
//!          v           v            v            v
//!         run       messages     options      configs
//!          |           |             \          /
//!          v           v              v        v
//!       runner ---> catalog            config
//!     CommitLoop  message pool      layered TOML
//!          |
//!          v
//!    git backends
//!  gix read, CLI write
//!
//!   error and logging sit under everything above
//! ```

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod runner;
