// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! One handler per subcommand.
//!
//! Handlers take parsed args plus a loaded [`Config`](crate::config::Config)
//! and do the work; exit codes are decided back in `main`.

pub mod config;
pub mod messages;
pub mod run;
