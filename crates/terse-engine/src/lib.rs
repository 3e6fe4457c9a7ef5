// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Condensation pipeline orchestrator.
//!
//! One entry point, [`condense`], runs the fixed sequence: validate
//! and build the prompt, resolve the configured provider, send the
//! single completion request, extract the structured result.
//! Persistence is the caller's concern; nothing here writes to disk.

pub mod gateway;

use terse_config::model::TerseConfig;
use terse_core::{CompletionProvider, CondensationResult, TerseError};
use terse_prompt::{VersionDefinitions, build_prompt, extract};
use tracing::{debug, info};

pub use gateway::resolve;

/// Condenses `input` using the backend named in `config`.
///
/// Validation failures (blank input, unknown provider, missing
/// credential) surface before any network traffic. Exactly one
/// provider request is made; there are no retries.
pub async fn condense(
    config: &TerseConfig,
    input: &str,
) -> Result<CondensationResult, TerseError> {
    // Input validation comes first: a blank input is reported even
    // when the provider config is also broken.
    let prompt = build_payload(config, input)?;
    let provider = gateway::resolve(config)?;
    run(provider.as_ref(), &prompt).await
}

/// Condenses `input` through an already-resolved provider.
///
/// Same pipeline as [`condense`] minus dispatch; used where the
/// caller owns provider selection.
pub async fn condense_with(
    provider: &dyn CompletionProvider,
    config: &TerseConfig,
    input: &str,
) -> Result<CondensationResult, TerseError> {
    let prompt = build_payload(config, input)?;
    run(provider, &prompt).await
}

fn build_payload(config: &TerseConfig, input: &str) -> Result<String, TerseError> {
    let versions = VersionDefinitions {
        version1: config.prompt.version1.clone(),
        version2: config.prompt.version2.clone(),
        version3: config.prompt.version3.clone(),
    };
    build_prompt(
        input,
        &versions,
        config.prompt.examples.as_deref(),
        config.provider.system_prompt.as_deref(),
    )
}

async fn run(
    provider: &dyn CompletionProvider,
    prompt: &str,
) -> Result<CondensationResult, TerseError> {
    debug!(provider = provider.name(), prompt_len = prompt.len(), "sending completion request");
    let raw = provider.complete(prompt).await?;
    let result = extract(&raw)?;
    info!(
        provider = provider.name(),
        has_thinking = result.thinking.is_some(),
        "condensation complete"
    );
    Ok(result)
}
