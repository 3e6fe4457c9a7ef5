// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the terse condensation pipeline.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and
//! environment variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! let config = terse_config::load().expect("config errors");
//! println!("provider: {}", config.provider.name);
//! ```

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::TerseConfig;

use terse_core::TerseError;

/// Load configuration from the XDG hierarchy and env vars.
///
/// High-level entry point: merges TOML files and `TERSE_*` env vars
/// via Figment and maps any extraction failure to
/// [`TerseError::Config`].
pub fn load() -> Result<TerseConfig, TerseError> {
    loader::load_config().map_err(|e| TerseError::Config(e.to_string()))
}

/// Load configuration from a TOML string.
///
/// Useful for testing and explicit configuration.
pub fn load_str(toml_content: &str) -> Result<TerseConfig, TerseError> {
    loader::load_config_from_str(toml_content).map_err(|e| TerseError::Config(e.to_string()))
}
