// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait implemented by each vendor adapter crate.

use async_trait::async_trait;

use crate::error::TerseError;

/// A remote text-generation backend.
///
/// One implementation per vendor, selected by the gateway from the
/// configured [`ProviderKind`](crate::types::ProviderKind) tag.
/// Each call sends exactly one request carrying the full prompt as
/// a single user message and returns the first generated text
/// candidate. Implementations perform no retries and no caching;
/// any transport or API failure maps to [`TerseError::Provider`].
#[async_trait]
pub trait CompletionProvider: Send + Sync + std::fmt::Debug {
    /// Stable lowercase vendor name (matches the config tag).
    fn name(&self) -> &'static str;

    /// Sends the prompt and returns the raw generated text.
    async fn complete(&self, prompt: &str) -> Result<String, TerseError>;
}
