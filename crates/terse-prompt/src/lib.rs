// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt assembly and response extraction.
//!
//! The builder produces the single instruction payload a provider
//! receives; the extractor recovers the thinking trace and the
//! three condensed versions from whatever text came back. Both are
//! pure synchronous string work, callable without any runtime.

pub mod builder;
pub mod defaults;
pub mod extract;

pub use builder::{VersionDefinitions, build_prompt};
pub use extract::extract;
