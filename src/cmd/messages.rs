// churn-rs: Bulk Git Commit Generator
//
// SPDX-FileCopyrightText: 2026 churn-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Messages command implementation for churn-rs.

use crate::catalog::MessageCatalog;
use crate::config::Config;
use crate::error::Result;

/// Main handler for the messages command.
///
/// Prints the catalog a run would draw from, one message per line, in
/// catalog order.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be built.
pub fn run_messages_command(config: &Config) -> Result<()> {
    let catalog = MessageCatalog::from_config(&config.messages)?;
    for message in catalog.iter() {
        println!("{message}");
    }
    Ok(())
}
