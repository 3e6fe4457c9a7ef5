// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI provider adapter for the terse pipeline.

pub mod client;
pub mod types;

use async_trait::async_trait;
use terse_config::model::OpenAiConfig;
use terse_core::{CompletionProvider, TerseError};
use tracing::debug;

use crate::client::OpenAiClient;

/// OpenAI chat completions backend.
#[derive(Debug)]
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates the provider from a credential and the OpenAI config section.
    pub fn new(api_key: &str, config: &OpenAiConfig) -> Result<Self, TerseError> {
        let client = OpenAiClient::new(api_key, config.model.clone())?;
        debug!(model = %config.model, "OpenAI provider initialized");
        Ok(Self { client })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
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
        let provider = OpenAiProvider::new("sk-test", &OpenAiConfig::default()).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn default_config_targets_the_original_model() {
        assert_eq!(OpenAiConfig::default().model, "gpt-4");
    }
}
