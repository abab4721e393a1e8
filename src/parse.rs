use crate::error::{ParseError, ParseErrorKind};
use crate::types::AsyncApi;

/// Parse a YAML string into an unvalidated [`AsyncApi`] document.
///
/// Performs deserialization and type mapping only; structural invariants
/// and reference consistency are the validator's job.
pub fn parse(input: &str) -> Result<AsyncApi, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
            line: None,
            column: None,
        });
    }

    // Deserialize via serde_json::Value as intermediate so YAML and JSON
    // inputs share the same mapping and error classification.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_error(&msg),
            message: msg,
            path: None,
            line: None,
            column: None,
        }
    })?;

    from_value(value)
}

/// Parse a JSON string into an unvalidated [`AsyncApi`] document.
pub fn parse_json(input: &str) -> Result<AsyncApi, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
            line: None,
            column: None,
        });
    }

    let value: serde_json::Value = serde_json::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        path: None,
        line: Some(e.line()),
        column: Some(e.column()),
    })?;

    from_value(value)
}

fn from_value(value: serde_json::Value) -> Result<AsyncApi, ParseError> {
    let Some(root) = value.as_object() else {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "document root must be a mapping".to_string(),
            path: None,
            line: None,
            column: None,
        });
    };

    match root.get("asyncapi").and_then(|v| v.as_str()) {
        None => {
            return Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: "missing 'asyncapi' version field".to_string(),
                path: Some("asyncapi".to_string()),
                line: None,
                column: None,
            });
        }
        Some(version) if !version.starts_with('3') => {
            return Err(ParseError {
                kind: ParseErrorKind::TypeMismatch,
                message: format!("unsupported AsyncAPI version '{}', expected 3.x", version),
                path: Some("asyncapi".to_string()),
                line: None,
                column: None,
            });
        }
        Some(_) => {}
    }

    serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_error(&msg),
            message: msg,
            path: None,
            line: None,
            column: None,
        }
    })
}

fn classify_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("missing field")
        || lower.contains("invalid type")
        || lower.contains("expected")
    {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
