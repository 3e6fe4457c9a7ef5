// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry CRUD operations.

use rusqlite::params;
use terse_core::{CondensedVersions, Entry, TerseError};

use crate::database::{Database, map_tr_err};

/// Current UTC time in millisecond ISO-8601 form.
pub(crate) fn now_iso8601() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> Result<Entry, rusqlite::Error> {
    Ok(Entry {
        id: row.get(0)?,
        content: row.get(1)?,
        condensed: CondensedVersions {
            version1: row.get(2)?,
            version2: row.get(3)?,
            version3: row.get(4)?,
        },
        thinking: row.get(5)?,
        date: row.get(6)?,
    })
}

/// Insert a new entry, letting SQLite assign the id. Returns the id.
pub async fn create(
    db: &Database,
    content: &str,
    condensed: &CondensedVersions,
    thinking: &str,
) -> Result<i64, TerseError> {
    let content = content.to_string();
    let condensed = condensed.clone();
    let thinking = thinking.to_string();
    let date = now_iso8601();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO entries (content, version1, version2, version3, thinking, date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    content,
                    condensed.version1,
                    condensed.version2,
                    condensed.version3,
                    thinking,
                    date,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_tr_err)
}

/// Get an entry by id. Fails with `NotFound` when no entry has that id.
pub async fn read(db: &Database, id: i64) -> Result<Entry, TerseError> {
    let found = db
        .connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content, version1, version2, version3, thinking, date
                 FROM entries WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], row_to_entry);
            match result {
                Ok(entry) => Ok(Some(entry)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)?;
    found.ok_or(TerseError::NotFound(id))
}

/// List all entries, most recent first (id descending as tiebreak).
pub async fn list_all(db: &Database) -> Result<Vec<Entry>, TerseError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content, version1, version2, version3, thinking, date
                 FROM entries ORDER BY date DESC, id DESC",
            )?;
            let rows = stmt.query_map([], row_to_entry)?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(map_tr_err)
}

/// Overwrite all fields of an entry, refreshing its date.
///
/// Strict semantics: fails with `NotFound` if the id is absent.
pub async fn update(
    db: &Database,
    id: i64,
    content: &str,
    condensed: &CondensedVersions,
    thinking: &str,
) -> Result<(), TerseError> {
    let content = content.to_string();
    let condensed = condensed.clone();
    let thinking = thinking.to_string();
    let date = now_iso8601();
    let affected = db
        .connection()
        .call(move |conn| {
            let n = conn.execute(
                "UPDATE entries
                 SET content = ?1, version1 = ?2, version2 = ?3, version3 = ?4,
                     thinking = ?5, date = ?6
                 WHERE id = ?7",
                params![
                    content,
                    condensed.version1,
                    condensed.version2,
                    condensed.version3,
                    thinking,
                    date,
                    id,
                ],
            )?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;
    if affected == 0 {
        return Err(TerseError::NotFound(id));
    }
    Ok(())
}

/// Delete an entry by id.
///
/// Strict semantics: fails with `NotFound` if the id is absent.
pub async fn delete(db: &Database, id: i64) -> Result<(), TerseError> {
    let affected = db
        .connection()
        .call(move |conn| {
            let n = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
            Ok(n)
        })
        .await
        .map_err(map_tr_err)?;
    if affected == 0 {
        return Err(TerseError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn versions(tag: &str) -> CondensedVersions {
        CondensedVersions {
            version1: format!("{tag}-v1"),
            version2: format!("{tag}-v2"),
            version3: format!("{tag}-v3"),
        }
    }

    #[tokio::test]
    async fn create_then_read_round_trips() {
        let (db, _dir) = setup_db().await;
        let id = create(&db, "hello world", &versions("a"), "thought hard")
            .await
            .unwrap();
        assert!(id > 0);

        let entry = read(&db, id).await.unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.content, "hello world");
        assert_eq!(entry.condensed, versions("a"));
        assert_eq!(entry.thinking, "thought hard");
        assert!(!entry.date.is_empty(), "date must be set at creation");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn read_missing_id_is_not_found() {
        let (db, _dir) = setup_db().await;
        match read(&db, 999).await {
            Err(TerseError::NotFound(999)) => {}
            other => panic!("expected NotFound(999), got {other:?}"),
        }
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_refreshes_date() {
        let (db, _dir) = setup_db().await;
        let id = create(&db, "before", &versions("a"), "").await.unwrap();
        let created = read(&db, id).await.unwrap();

        // Ensure the refreshed date can differ at millisecond resolution.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        update(&db, id, "after", &versions("b"), "new trace")
            .await
            .unwrap();
        let updated = read(&db, id).await.unwrap();
        assert_eq!(updated.content, "after");
        assert_eq!(updated.condensed, versions("b"));
        assert_eq!(updated.thinking, "new trace");
        assert!(
            updated.date > created.date,
            "date must reflect the most recent write"
        );
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let (db, _dir) = setup_db().await;
        let result = update(&db, 404, "x", &versions("x"), "").await;
        assert!(matches!(result, Err(TerseError::NotFound(404))));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let (db, _dir) = setup_db().await;
        let id = create(&db, "doomed", &versions("d"), "").await.unwrap();
        delete(&db, id).await.unwrap();
        assert!(matches!(read(&db, id).await, Err(TerseError::NotFound(_))));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let (db, _dir) = setup_db().await;
        let result = delete(&db, 404).await;
        assert!(matches!(result, Err(TerseError::NotFound(404))));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_all_orders_by_date_descending() {
        let (db, _dir) = setup_db().await;
        let first = create(&db, "t1", &versions("1"), "").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = create(&db, "t2", &versions("2"), "").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let third = create(&db, "t3", &versions("3"), "").await.unwrap();

        let entries = list_all(&db).await.unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third, second, first]);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_all_empty_store_returns_empty() {
        let (db, _dir) = setup_db().await;
        assert!(list_all(&db).await.unwrap().is_empty());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let (db, _dir) = setup_db().await;
        let first = create(&db, "one", &versions("1"), "").await.unwrap();
        delete(&db, first).await.unwrap();
        let second = create(&db, "two", &versions("2"), "").await.unwrap();
        assert!(second > first, "AUTOINCREMENT must not reuse ids");
        db.close().await.unwrap();
    }
}
