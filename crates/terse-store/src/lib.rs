// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed persistence for condensation entries.
//!
//! [`EntryStore`] wraps a [`Database`] handle and delegates to the
//! typed query functions in [`entries`]. Every operation is an
//! independent transaction against the local database file; writes
//! to the same id are last-write-wins.

pub mod database;
pub mod entries;

pub use database::Database;

use terse_core::{CondensedVersions, Entry, TerseError};

/// SQLite-backed entry store.
pub struct EntryStore {
    db: Database,
}

impl EntryStore {
    /// Opens the store at the given database path, creating the file
    /// and schema on first use.
    pub async fn open(path: &str) -> Result<Self, TerseError> {
        let db = Database::open(path).await?;
        Ok(Self { db })
    }

    /// All entries, most recent first.
    pub async fn list_all(&self) -> Result<Vec<Entry>, TerseError> {
        entries::list_all(&self.db).await
    }

    /// Persists a new entry and returns its store-assigned id.
    pub async fn create(
        &self,
        content: &str,
        condensed: &CondensedVersions,
        thinking: &str,
    ) -> Result<i64, TerseError> {
        entries::create(&self.db, content, condensed, thinking).await
    }

    /// Reads one entry. Fails with [`TerseError::NotFound`] when absent.
    pub async fn read(&self, id: i64) -> Result<Entry, TerseError> {
        entries::read(&self.db, id).await
    }

    /// Overwrites all fields of an entry (including its date).
    /// Fails with [`TerseError::NotFound`] when absent.
    pub async fn update(
        &self,
        id: i64,
        content: &str,
        condensed: &CondensedVersions,
        thinking: &str,
    ) -> Result<(), TerseError> {
        entries::update(&self.db, id, content, condensed, thinking).await
    }

    /// Deletes one entry. Fails with [`TerseError::NotFound`] when absent.
    pub async fn delete(&self, id: i64) -> Result<(), TerseError> {
        entries::delete(&self.db, id).await
    }

    /// Checkpoints the WAL. Call before process exit.
    pub async fn close(&self) -> Result<(), TerseError> {
        self.db.close().await
    }
}
