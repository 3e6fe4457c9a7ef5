// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./terse.toml` > `~/.config/terse/terse.toml` > `/etc/terse/terse.toml`
//! with environment variable overrides via `TERSE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TerseConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/terse/terse.toml` (system-wide)
/// 3. `~/.config/terse/terse.toml` (user XDG config)
/// 4. `./terse.toml` (local directory)
/// 5. `TERSE_*` environment variables
pub fn load_config() -> Result<TerseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TerseConfig::default()))
        .merge(Toml::file("/etc/terse/terse.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("terse/terse.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("terse.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<TerseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TerseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TerseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TerseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TERSE_PROVIDER_API_KEY` must map to
/// `provider.api_key`, not `provider.api.key`.
fn env_provider() -> Env {
    Env::prefixed("TERSE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TERSE_PROVIDER_API_KEY -> "provider_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("provider_", "provider.", 1)
            .replacen("claude_", "claude.", 1)
            .replacen("groq_", "groq.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("prompt_", "prompt.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
