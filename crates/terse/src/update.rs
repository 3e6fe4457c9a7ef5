// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terse update` command implementation.
//!
//! Re-runs the full pipeline on the replacement text, then overwrites
//! every field of the entry (refreshing its date). The existence check
//! happens before condensation so an unknown id fails without burning
//! a provider call.

use terse_config::model::TerseConfig;
use terse_core::TerseError;
use terse_store::EntryStore;
use tracing::info;

use crate::show::print_entry;

/// Runs the `terse update` command.
pub async fn run_update(config: &TerseConfig, id: i64, text: &str) -> Result<(), TerseError> {
    let store = EntryStore::open(&config.storage.database_path).await?;
    store.read(id).await?;

    let result = terse_engine::condense(config, text).await?;
    let thinking = result.thinking.as_deref().unwrap_or("");
    store.update(id, text, &result.response, thinking).await?;
    info!(id, "entry updated");

    let entry = store.read(id).await?;
    store.close().await?;

    print_entry(&entry);
    Ok(())
}
