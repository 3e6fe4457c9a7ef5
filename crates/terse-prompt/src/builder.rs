// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt assembly.
//!
//! Composes the single instruction payload sent to a provider:
//! task framing, thinking/response emission rules, the input text
//! between `<QUERY>` sentinels, the three version instructions,
//! the few-shot examples, and an optional trailing system prompt.
//! The payload is byte-identical for identical inputs.

use terse_core::TerseError;

use crate::defaults::{DEFAULT_EXAMPLES, DEFAULT_VERSION1, DEFAULT_VERSION2, DEFAULT_VERSION3};

/// User overrides for the three version instructions.
///
/// Each key falls back to its own built-in default independently;
/// a missing `version2` does not drag `version1` back to default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDefinitions {
    pub version1: Option<String>,
    pub version2: Option<String>,
    pub version3: Option<String>,
}

/// Builds the full prompt payload for one condensation request.
///
/// Fails with [`TerseError::EmptyInput`] when `input` is blank
/// after trimming. The input text itself is embedded untrimmed,
/// exactly once, between the `<QUERY>` sentinels.
///
/// A custom `examples` list replaces the built-in examples
/// wholesale; examples are joined with `\n---\n` either way.
pub fn build_prompt(
    input: &str,
    versions: &VersionDefinitions,
    examples: Option<&[String]>,
    system_prompt: Option<&str>,
) -> Result<String, TerseError> {
    if input.trim().is_empty() {
        return Err(TerseError::EmptyInput);
    }

    let version1 = versions.version1.as_deref().unwrap_or(DEFAULT_VERSION1);
    let version2 = versions.version2.as_deref().unwrap_or(DEFAULT_VERSION2);
    let version3 = versions.version3.as_deref().unwrap_or(DEFAULT_VERSION3);

    let examples_block = match examples {
        Some(list) => list.join("\n---\n"),
        None => DEFAULT_EXAMPLES.join("\n---\n"),
    };

    let mut prompt = format!(
        r#"You are tasked with rewriting an input message into shorter versions while preserving its core meaning and intent. Follow these instructions carefully:

1. Use a <thinking></thinking> section as a scratchpad before providing your final answer. Within these tags:
   - Analyze the given message
   - Identify the core ideas and author's main intent
   - Consider multiple approaches for condensing the message
   - Develop a structured approach to solving the task

2. After your analysis, provide your final, refined answer wrapped in <response> tags. This should be a JSON object containing three shortened versions of the message.

3. Here is the input message to rewrite:

<QUERY>
{input}
</QUERY>

4. Follow these steps to rewrite the message in 3 iterations/versions:
   - Version 1: {version1}
   - Version 2: {version2}
   - Version 3: {version3}

5. Here are examples of expected outputs:
{examples_block}

6. Now, analyze the given message and provide your final answer in the following JSON format:

<response>
{{
  "version1": "...",
  "version2": "...",
  "version3": "..."
}}
</response>

Remember to preserve the core meaning and intent of the original message in all versions."#
    );

    if let Some(system_prompt) = system_prompt
        && !system_prompt.is_empty()
    {
        prompt.push_str("\n\nSystem Prompt: ");
        prompt.push_str(system_prompt);
    }

    Ok(prompt)
}
