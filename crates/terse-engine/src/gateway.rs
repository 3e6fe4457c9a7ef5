// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider resolution.
//!
//! Maps the configured provider name to a concrete backend. All
//! dispatch decisions happen here, once per call, before any prompt
//! bytes leave the process.

use std::str::FromStr;

use terse_anthropic::ClaudeProvider;
use terse_config::model::TerseConfig;
use terse_core::{CompletionProvider, ProviderKind, TerseError};
use terse_groq::GroqProvider;
use terse_openai::OpenAiProvider;
use tracing::debug;

/// Resolves the configured provider into a ready-to-call backend.
///
/// Fails with [`TerseError::UnknownProvider`] for an unrecognized
/// name and [`TerseError::MissingCredential`] when the API key is
/// absent or empty. Neither failure touches the network.
pub fn resolve(config: &TerseConfig) -> Result<Box<dyn CompletionProvider>, TerseError> {
    let kind = ProviderKind::from_str(&config.provider.name)
        .map_err(|_| TerseError::UnknownProvider(config.provider.name.clone()))?;

    let api_key = config
        .provider
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| TerseError::MissingCredential {
            provider: kind.to_string(),
        })?;

    debug!(provider = %kind, "resolved completion backend");

    match kind {
        ProviderKind::Claude => Ok(Box::new(ClaudeProvider::new(api_key, &config.claude)?)),
        ProviderKind::Groq => Ok(Box::new(GroqProvider::new(api_key, &config.groq)?)),
        ProviderKind::OpenAi => Ok(Box::new(OpenAiProvider::new(api_key, &config.openai)?)),
    }
}
