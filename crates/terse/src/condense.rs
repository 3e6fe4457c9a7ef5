// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terse condense` command implementation.
//!
//! Runs the full pipeline and saves the result as a new entry. The
//! store is only touched after condensation fully succeeds, so a
//! provider or extraction failure leaves no partial entry behind.

use terse_config::model::TerseConfig;
use terse_core::TerseError;
use terse_store::EntryStore;
use tracing::info;

use crate::show::print_entry;

/// Runs the `terse condense` command.
pub async fn run_condense(
    config: &TerseConfig,
    text: &str,
    json: bool,
) -> Result<(), TerseError> {
    let result = terse_engine::condense(config, text).await?;

    let store = EntryStore::open(&config.storage.database_path).await?;
    let thinking = result.thinking.as_deref().unwrap_or("");
    let id = store.create(text, &result.response, thinking).await?;
    info!(id, "entry saved");

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
