// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI chat completions API.
//!
//! One request per call, no retries.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use terse_core::TerseError;
use tracing::debug;

use crate::types::{ApiErrorResponse, CompletionMessage, CompletionRequest, CompletionResponse};

/// Base URL for the OpenAI chat completions API.
const API_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// HTTP client for OpenAI API communication.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI API client with bearer authentication.
    pub fn new(api_key: &str, model: String) -> Result<Self, TerseError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                TerseError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| TerseError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends the prompt as a single user message and returns the
    /// first choice's content.
    pub async fn complete(&self, prompt: &str) -> Result<String, TerseError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![CompletionMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TerseError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "chat completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("OpenAI API error: {}", api_err.error.message)
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(TerseError::Provider {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| TerseError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let completion: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| TerseError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion token usage"
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TerseError::Provider {
                message: "response contained no choices".into(),
                source: None,
            })
    }
}
