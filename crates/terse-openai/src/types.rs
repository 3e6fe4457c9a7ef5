// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI chat completions request/response types.

use serde::{Deserialize, Serialize};

/// A chat completions request.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier (e.g., "gpt-4").
    pub model: String,
    /// Conversation messages. The full prompt travels as one user message.
    pub messages: Vec<CompletionMessage>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMessage {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Plain text content.
    pub content: String,
}

/// A chat completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Generated candidates; the first one is used.
    pub choices: Vec<CompletionChoice>,
    /// Token accounting, when the API reports it.
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// The generated message.
    pub message: CompletionMessage,
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionUsage {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens generated in the completion.
    #[serde(default)]
    pub completion_tokens: u32,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Error type identifier, when present.
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
}
