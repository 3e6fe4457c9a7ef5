// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terse delete` command implementation.

use terse_config::model::TerseConfig;
use terse_core::TerseError;
use terse_store::EntryStore;
use tracing::info;

/// Runs the `terse delete` command.
pub async fn run_delete(config: &TerseConfig, id: i64) -> Result<(), TerseError> {
    let store = EntryStore::open(&config.storage.database_path).await?;
    store.delete(id).await?;
    store.close().await?;
    info!(id, "entry deleted");

    println!("deleted entry #{id}");
    Ok(())
}
