//! Runtime expressions: `$message[.header|.payload]#/<fragment>`.
//!
//! CorrelationId and reply-address `location` fields use this grammar to
//! point at a value inside a message at delivery time. Parse failure is
//! reported as a value, never a panic — the validator turns it into a
//! violation.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static FRAGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/[^/#]+)+$").unwrap());

/// Which part of the message the expression starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageSource {
    /// The whole message (`$message`).
    Message,
    /// The message headers (`$message.header`).
    Header,
    /// The message payload (`$message.payload`).
    Payload,
}

/// A parsed runtime expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeExpression {
    pub source: MessageSource,
    /// The `#`-introduced fragment, including its leading `/`, if present.
    pub fragment: Option<String>,
}

impl RuntimeExpression {
    /// The fragment split into its path segments.
    pub fn fragment_segments(&self) -> Vec<&str> {
        match &self.fragment {
            Some(fragment) => fragment.split('/').filter(|s| !s.is_empty()).collect(),
            None => Vec::new(),
        }
    }
}

/// Produced when a location string does not match the expression grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionError {
    pub expression: String,
    pub reason: String,
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid runtime expression '{}': {}", self.expression, self.reason)
    }
}

impl std::error::Error for ExpressionError {}

fn error(expression: &str, reason: impl Into<String>) -> ExpressionError {
    ExpressionError {
        expression: expression.to_string(),
        reason: reason.into(),
    }
}

/// Parse a runtime expression.
pub fn parse(expression: &str) -> Result<RuntimeExpression, ExpressionError> {
    let Some(rest) = expression.strip_prefix("$message") else {
        return Err(error(expression, "must begin with '$message'"));
    };

    let (source, rest) = if let Some(rest) = rest.strip_prefix('.') {
        if let Some(rest) = rest.strip_prefix("header") {
            (MessageSource::Header, rest)
        } else if let Some(rest) = rest.strip_prefix("payload") {
            (MessageSource::Payload, rest)
        } else {
            return Err(error(expression, "source must be 'header' or 'payload'"));
        }
    } else {
        (MessageSource::Message, rest)
    };

    if rest.is_empty() {
        return Ok(RuntimeExpression {
            source,
            fragment: None,
        });
    }

    let Some(fragment) = rest.strip_prefix('#') else {
        return Err(error(expression, "fragment must begin with '#'"));
    };
    if !FRAGMENT_RE.is_match(fragment) {
        return Err(error(
            expression,
            "fragment must be '/'-delimited with non-empty segments",
        ));
    }

    Ok(RuntimeExpression {
        source,
        fragment: Some(fragment.to_string()),
    })
}
