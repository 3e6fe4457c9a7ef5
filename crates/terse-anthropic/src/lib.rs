// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude provider adapter for the terse pipeline.
//!
//! Implements [`CompletionProvider`] over the Anthropic Messages
//! API: one prompt in, one text blob out.

pub mod client;
pub mod types;

use async_trait::async_trait;
use terse_config::model::ClaudeConfig;
use terse_core::{CompletionProvider, TerseError};
use tracing::debug;

use crate::client::AnthropicClient;

/// Anthropic Claude backend.
#[derive(Debug)]
pub struct ClaudeProvider {
    client: AnthropicClient,
}

impl ClaudeProvider {
    /// Creates the provider from a credential and the Claude config
    /// section. The credential is validated for presence by the
    /// gateway before this runs.
    pub fn new(api_key: &str, config: &ClaudeConfig) -> Result<Self, TerseError> {
        let client = AnthropicClient::new(
            api_key,
            &config.api_version,
            config.model.clone(),
            config.max_tokens,
        )?;
        debug!(model = %config.model, "Claude provider initialized");
        Ok(Self { client })
    }
}

#[async_trait]
impl CompletionProvider for ClaudeProvider {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn complete(&self, prompt: &str) -> Result<String, TerseError> {
        self.client.complete(prompt).await
    }
}
