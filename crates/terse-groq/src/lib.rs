// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Groq provider adapter for the terse pipeline.

pub mod client;
pub mod types;

use async_trait::async_trait;
use terse_config::model::GroqConfig;
use terse_core::{CompletionProvider, TerseError};
use tracing::debug;

use crate::client::GroqClient;

/// Groq backend (OpenAI-compatible chat completions).
#[derive(Debug)]
pub struct GroqProvider {
    client: GroqClient,
}

impl GroqProvider {
    /// Creates the provider from a credential and the Groq config section.
    pub fn new(api_key: &str, config: &GroqConfig) -> Result<Self, TerseError> {
        let client = GroqClient::new(api_key, config.model.clone())?;
        debug!(model = %config.model, "Groq provider initialized");
        Ok(Self { client })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, prompt: &str) -> Result<String, TerseError> {
        self.client.complete(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name_matches_config_tag() {
        let provider = GroqProvider::new("gsk-test", &GroqConfig::default()).unwrap();
        assert_eq!(provider.name(), "groq");
    }

    #[test]
    fn default_config_targets_the_original_model() {
        assert_eq!(GroqConfig::default().model, "llama-3.1-72b-versatile");
    }
}
