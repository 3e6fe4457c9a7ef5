// SPDX-FileCopyrightText: 2026 Terse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Marker-delimited extraction of model output.
//!
//! A two-pass scan over the raw generated text: first the
//! `<thinking>` region (optional), then the `<response>` region
//! (required). First-match, non-greedy -- if markers repeat, only
//! the first enclosed region counts, since model output may contain
//! nested or repeated marker-like text inside `thinking`.

use terse_core::{CondensationResult, CondensedVersions, TerseError};

const THINKING_OPEN: &str = "<thinking>";
const THINKING_CLOSE: &str = "</thinking>";
const RESPONSE_OPEN: &str = "<response>";
const RESPONSE_CLOSE: &str = "</response>";

/// Returns the first region between `open` and the nearest
/// following `close`.
fn delimited<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let rest = &text[start..];
    let end = rest.find(close)?;
    Some(&rest[..end])
}

/// Splits raw model output into a thinking trace and the three
/// condensed versions.
///
/// A missing thinking section is best-effort (`thinking = None`).
/// A missing response section fails with
/// [`TerseError::MissingResponseSection`]; a response section that
/// is not a JSON object carrying all three version keys as strings
/// fails with [`TerseError::MalformedResponse`].
pub fn extract(raw: &str) -> Result<CondensationResult, TerseError> {
    let thinking = delimited(raw, THINKING_OPEN, THINKING_CLOSE).map(str::to_string);

    let body = delimited(raw, RESPONSE_OPEN, RESPONSE_CLOSE)
        .ok_or(TerseError::MissingResponseSection)?;

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| TerseError::MalformedResponse(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| TerseError::MalformedResponse("response is not a JSON object".into()))?;

    let field = |key: &str| -> Result<String, TerseError> {
        object
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                TerseError::MalformedResponse(format!("missing or non-string key: {key}"))
            })
    };

    Ok(CondensationResult {
        thinking,
        response: CondensedVersions {
            version1: field("version1")?,
            version2: field("version2")?,
            version3: field("version3")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(thinking: &str, response_json: &str) -> String {
        format!("<thinking>{thinking}</thinking>\n\n<response>{response_json}</response>")
    }

    const GOOD_JSON: &str = r#"{"version1": "a", "version2": "b", "version3": "c"}"#;

    #[test]
    fn round_trips_thinking_and_versions() {
        let raw = wrap("weighed three options", GOOD_JSON);
        let result = extract(&raw).unwrap();
        assert_eq!(result.thinking.as_deref(), Some("weighed three options"));
        assert_eq!(result.response.version1, "a");
        assert_eq!(result.response.version2, "b");
        assert_eq!(result.response.version3, "c");
    }

    #[test]
    fn missing_thinking_is_none_not_an_error() {
        let raw = format!("preamble <response>{GOOD_JSON}</response>");
        let result = extract(&raw).unwrap();
        assert!(result.thinking.is_none());
        assert_eq!(result.response.version1, "a");
    }

    #[test]
    fn missing_response_section_is_an_error() {
        let raw = "<thinking>all thought, no answer</thinking>";
        assert!(matches!(
            extract(raw),
            Err(TerseError::MissingResponseSection)
        ));
    }

    #[test]
    fn unterminated_response_marker_is_missing_section() {
        let raw = format!("<response>{GOOD_JSON}");
        assert!(matches!(
            extract(&raw),
            Err(TerseError::MissingResponseSection)
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let raw = wrap("t", "not json at all");
        assert!(matches!(extract(&raw), Err(TerseError::MalformedResponse(_))));
    }

    #[test]
    fn non_object_json_is_malformed() {
        let raw = wrap("t", r#"["version1", "version2", "version3"]"#);
        assert!(matches!(extract(&raw), Err(TerseError::MalformedResponse(_))));
    }

    #[test]
    fn missing_version_key_is_malformed() {
        let raw = wrap("t", r#"{"version1": "a", "version2": "b"}"#);
        match extract(&raw) {
            Err(TerseError::MalformedResponse(msg)) => assert!(msg.contains("version3")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn non_string_version_value_is_malformed() {
        let raw = wrap("t", r#"{"version1": "a", "version2": 2, "version3": "c"}"#);
        match extract(&raw) {
            Err(TerseError::MalformedResponse(msg)) => assert!(msg.contains("version2")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn repeated_markers_use_first_region_only() {
        let raw = format!(
            "<thinking>first</thinking> noise <thinking>second</thinking>\
             <response>{GOOD_JSON}</response><response>{{}}</response>"
        );
        let result = extract(&raw).unwrap();
        assert_eq!(result.thinking.as_deref(), Some("first"));
        assert_eq!(result.response.version1, "a");
    }

    #[test]
    fn multiline_thinking_is_preserved() {
        let thinking = "line one\nline two\n  indented";
        let raw = wrap(thinking, GOOD_JSON);
        let result = extract(&raw).unwrap();
        assert_eq!(result.thinking.as_deref(), Some(thinking));
    }

    #[test]
    fn extract_round_trips_arbitrary_strings() {
        let json = serde_json::json!({
            "version1": "with \"quotes\" and \\ backslashes",
            "version2": "emoji 🎉 and → arrows",
            "version3": "",
        })
        .to_string();
        let raw = wrap("trace", &json);
        let result = extract(&raw).unwrap();
        assert_eq!(result.response.version1, "with \"quotes\" and \\ backslashes");
        assert_eq!(result.response.version2, "emoji 🎉 and → arrows");
        assert_eq!(result.response.version3, "");
    }
}
