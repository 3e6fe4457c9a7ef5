// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terse show` command implementation.

use terse_config::model::TerseConfig;
use terse_core::{Entry, TerseError};
use terse_store::EntryStore;

/// Runs the `terse show` command.
pub async fn run_show(config: &TerseConfig, id: i64, json: bool) -> Result<(), TerseError> {
    let store = EntryStore::open(&config.storage.database_path).await?;
    let entry = store.read(id).await?;
    store.close().await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entry).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_entry(&entry);
    }

    Ok(())
}

/// Print a full entry in the standard human-readable layout.
pub(crate) fn print_entry(entry: &Entry) {
    println!();
    println!("  entry #{} ({})", entry.id, entry.date);
    println!("  {}", "-".repeat(35));
    println!("    Original:  {}", entry.content);
    println!("    Version 1: {}", entry.condensed.version1);
    println!("    Version 2: {}", entry.condensed.version2);
    println!("    Version 3: {}", entry.condensed.version3);
    if !entry.thinking.is_empty() {
        println!();
        println!("    Thinking:  {}", entry.thinking);
    }
    println!();
}
