// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the terse condensation pipeline.

use thiserror::Error;

/// The primary error type used across all terse crates.
///
/// Every variant is terminal for the current call. Stages surface
/// errors to the orchestrator unchanged; nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum TerseError {
    /// Input text was blank (empty or whitespace-only) after trimming.
    #[error("input text cannot be empty")]
    EmptyInput,

    /// The configured provider name is not one of the supported backends.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// No API key configured for the selected provider. Checked before
    /// any network attempt.
    #[error("API key not configured for provider {provider}")]
    MissingCredential { provider: String },

    /// Transport or vendor API failure, carrying the vendor detail.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Model output contained no `<response>` section.
    #[error("model output has no <response> section")]
    MissingResponseSection,

    /// The `<response>` section did not parse as a JSON object with
    /// all three version keys as strings.
    #[error("malformed response payload: {0}")]
    MalformedResponse(String),

    /// No entry exists with the given id.
    #[error("entry not found: {0}")]
    NotFound(i64),

    /// Storage backend errors (database open, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (invalid TOML, bad field values).
    #[error("configuration error: {0}")]
    Config(String),
}
