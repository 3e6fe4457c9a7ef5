// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the terse condensation pipeline.
//!
//! This crate provides the error type, shared data model, and the
//! [`CompletionProvider`] trait that every vendor adapter crate
//! implements.

pub mod error;
pub mod provider;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TerseError;
pub use provider::CompletionProvider;
pub use types::{CondensationResult, CondensedVersions, Entry, ProviderKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terse_error_variants_construct() {
        // Verify all error kinds exist and can be constructed.
        let _empty = TerseError::EmptyInput;
        let _unknown = TerseError::UnknownProvider("gemini".into());
        let _missing = TerseError::MissingCredential {
            provider: "claude".into(),
        };
        let _provider = TerseError::Provider {
            message: "boom".into(),
            source: None,
        };
        let _no_response = TerseError::MissingResponseSection;
        let _malformed = TerseError::MalformedResponse("bad json".into());
        let _not_found = TerseError::NotFound(42);
        let _storage = TerseError::Storage {
            source: Box::new(std::io::Error::other("disk")),
        };
        let _config = TerseError::Config("bad toml".into());
    }

    #[test]
    fn error_messages_carry_detail() {
        let err = TerseError::UnknownProvider("gemini".into());
        assert_eq!(err.to_string(), "unknown provider: gemini");

        let err = TerseError::NotFound(7);
        assert_eq!(err.to_string(), "entry not found: 7");

        let err = TerseError::MissingCredential {
            provider: "groq".into(),
        };
        assert!(err.to_string().contains("groq"));
    }

    #[test]
    fn completion_provider_is_object_safe() {
        fn _assert(_: &dyn CompletionProvider) {}
    }
}
