//! JSON formatting engine.
//!
//! This module backs the formatter page and the `devkit format` subcommand.
//! Input is parsed to a [`serde_json::Value`] and re-serialized, so output is
//! always syntactically valid JSON; malformed input surfaces as a single
//! [`FormatError`] carrying serde's line/column diagnostics.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Errors that can occur while formatting JSON.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input is not valid JSON.
    ///
    /// The wrapped serde error includes the line and column of the first
    /// offending token.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pretty-prints a JSON document with the given indent width.
///
/// Object keys are emitted in sorted order (a property of
/// [`serde_json::Map`]'s default `BTreeMap` backing), which keeps repeated
/// formatting of the same document stable.
///
/// # Examples
///
/// ```
/// let formatted = dk_core::format_json(r#"{"b":1,"a":[2,3]}"#, 2).unwrap();
/// assert_eq!(formatted, "{\n  \"a\": [\n    2,\n    3\n  ],\n  \"b\": 1\n}");
/// ```
///
/// # Errors
///
/// Returns [`FormatError::Parse`] if `input` is not valid JSON.
pub fn format_json(input: &str, indent_width: usize) -> Result<String, FormatError> {
    let value: Value = serde_json::from_str(input)?;

    let indent = vec![b' '; indent_width];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::with_capacity(input.len());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Collapses a JSON document to its most compact form.
///
/// # Errors
///
/// Returns [`FormatError::Parse`] if `input` is not valid JSON.
pub fn minify_json(input: &str) -> Result<String, FormatError> {
    let value: Value = serde_json::from_str(input)?;
    let compact = serde_json::to_string(&value)?;
    Ok(compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_pretty() {
        let formatted = format_json(r#"{"name":"devkit","tags":["tui","json"]}"#, 2).unwrap();
        let expected = "{\n  \"name\": \"devkit\",\n  \"tags\": [\n    \"tui\",\n    \"json\"\n  ]\n}";
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_format_json_custom_indent() {
        let formatted = format_json(r#"{"a":1}"#, 4).unwrap();
        assert_eq!(formatted, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_format_json_sorts_keys() {
        let formatted = format_json(r#"{"zebra":1,"apple":2}"#, 2).unwrap();
        let apple = formatted.find("apple").unwrap();
        let zebra = formatted.find("zebra").unwrap();
        assert!(apple < zebra);
    }

    #[test]
    fn test_format_json_scalar_input() {
        // Any JSON document is accepted, not just objects
        assert_eq!(format_json("42", 2).unwrap(), "42");
        assert_eq!(format_json(r#""text""#, 2).unwrap(), "\"text\"");
        assert_eq!(format_json("null", 2).unwrap(), "null");
    }

    #[test]
    fn test_format_json_invalid_input() {
        let err = format_json("{not json}", 2).unwrap_err();
        assert!(matches!(err, FormatError::Parse(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn test_minify_json() {
        let minified = minify_json("{\n  \"a\": [1, 2],\n  \"b\": true\n}").unwrap();
        assert_eq!(minified, r#"{"a":[1,2],"b":true}"#);
    }

    #[test]
    fn test_minify_json_invalid_input() {
        assert!(minify_json("[1, 2,").is_err());
    }

    #[test]
    fn test_format_then_minify_round_trip() {
        // Keys already sorted, so the round trip is byte-identical
        let original = r#"{"nested":{"flag":false,"list":[1,2,3]}}"#;
        let formatted = format_json(original, 2).unwrap();
        let minified = minify_json(&formatted).unwrap();
        assert_eq!(minified, original);
    }
}
