// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `terse list` command implementation.

use terse_config::model::TerseConfig;
use terse_core::TerseError;
use terse_store::EntryStore;

/// Runs the `terse list` command. Entries come back most recent
/// first; an empty store is reported, not an error.
pub async fn run_list(config: &TerseConfig, json: bool) -> Result<(), TerseError> {
    let store = EntryStore::open(&config.storage.database_path).await?;
    let entries = store.list_all().await?;
    store.close().await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    if entries.is_empty() {
        println!("no entries yet -- run `terse condense` to create one");
        return Ok(());
    }

    println!();
    for entry in &entries {
        println!("  #{:<4} {}  {}", entry.id, entry.date, truncate(&entry.content, 60));
    }
    println!();
    println!("  {} entries", entries.len());
    println!();

    Ok(())
}

/// Truncate on a character boundary, appending an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "x".repeat(100);
        let out = truncate(&long, 60);
        assert_eq!(out.chars().count(), 63);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let text = "é".repeat(80);
        let out = truncate(&text, 60);
        assert!(out.starts_with('é'));
        assert!(out.ends_with("..."));
    }
}
