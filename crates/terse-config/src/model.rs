// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the terse pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level terse configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to
/// sensible values -- except the API key, whose absence is an error
/// at dispatch time, never a default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TerseConfig {
    /// Provider selection and credential.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Anthropic Claude settings.
    #[serde(default)]
    pub claude: ClaudeConfig,

    /// Groq settings.
    #[serde(default)]
    pub groq: GroqConfig,

    /// OpenAI settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Prompt customization (version instructions and examples).
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Entry store settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Provider selection and credential.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Backend to dispatch to: "claude", "groq", or "openai".
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// API key for the selected backend. `None` or empty fails with
    /// a missing-credential error before any network attempt.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Optional free text appended to every prompt as a trailing
    /// labeled section.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            api_key: None,
            system_prompt: None,
        }
    }
}

fn default_provider_name() -> String {
    "claude".to_string()
}

/// Anthropic Claude settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClaudeConfig {
    /// Model identifier for the Messages API.
    #[serde(default = "default_claude_model")]
    pub model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_claude_max_tokens")]
    pub max_tokens: u32,

    /// Anthropic API version header value.
    #[serde(default = "default_claude_api_version")]
    pub api_version: String,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            model: default_claude_model(),
            max_tokens: default_claude_max_tokens(),
            api_version: default_claude_api_version(),
        }
    }
}

fn default_claude_model() -> String {
    "claude-3-sonnet-20240229".to_string()
}

fn default_claude_max_tokens() -> u32 {
    1000
}

fn default_claude_api_version() -> String {
    "2023-06-01".to_string()
}

/// Groq settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// Model identifier for the chat completions API.
    #[serde(default = "default_groq_model")]
    pub model: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            model: default_groq_model(),
        }
    }
}

fn default_groq_model() -> String {
    "llama-3.1-72b-versatile".to_string()
}

/// OpenAI settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// Model identifier for the chat completions API.
    #[serde(default = "default_openai_model")]
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
        }
    }
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

/// Prompt customization.
///
/// Version instructions fall back to the built-in default
/// independently per key; a custom example list replaces the
/// built-in examples wholesale.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Override for the version 1 instruction.
    #[serde(default)]
    pub version1: Option<String>,

    /// Override for the version 2 instruction.
    #[serde(default)]
    pub version2: Option<String>,

    /// Override for the version 3 instruction.
    #[serde(default)]
    pub version3: Option<String>,

    /// Ordered few-shot examples. `None` uses the built-in three.
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

/// Entry store settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("terse").join("terse.db"))
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| "terse.db".to_string())
}
