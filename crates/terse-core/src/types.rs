// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the terse workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The three supported remote text-generation backends.
///
/// String forms are `claude`, `groq`, and `openai`; parsing any
/// other value is how `UnknownProvider` surfaces at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Claude,
    Groq,
    OpenAi,
}

/// The three named condensation styles generated for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedVersions {
    /// Grammar and clarity cleanup.
    pub version1: String,
    /// Abbreviation substitution.
    pub version2: String,
    /// Shorter-synonym substitution.
    pub version3: String,
}

/// One saved condensation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier. Monotonic, immutable, never reused.
    pub id: i64,
    /// The original input text.
    pub content: String,
    /// The three generated variants.
    pub condensed: CondensedVersions,
    /// The model's reasoning trace. Empty if extraction found none.
    pub thinking: String,
    /// ISO-8601 timestamp of the most recent write.
    pub date: String,
}

/// The structured result of one condensation call.
///
/// Ephemeral: produced per request and folded into an [`Entry`] by
/// the caller after a fully successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondensationResult {
    /// Extracted reasoning trace, or `None` when the output carried
    /// no `<thinking>` section.
    pub thinking: Option<String>,
    /// The three condensed versions.
    pub response: CondensedVersions,
}
