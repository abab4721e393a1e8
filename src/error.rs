use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    UnknownVariant,
}

/// Produced by `parse` when YAML/JSON deserialization fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Produced by the dereferencer. A reference lookup either succeeds with a
/// borrow of the target component or fails with one of these two cases;
/// there is no partial result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DereferenceError {
    /// The reference string is syntactically wrong for the requested
    /// component kind (wrong prefix, wrong shape, unknown collection).
    Invalid { reference: String, reason: String },
    /// The reference is well-formed but no entry exists at the target
    /// location, or an intermediate collection is absent.
    NotFound { reference: String },
}

impl DereferenceError {
    pub fn invalid(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        DereferenceError::Invalid {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(reference: impl Into<String>) -> Self {
        DereferenceError::NotFound {
            reference: reference.into(),
        }
    }
}

impl fmt::Display for DereferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DereferenceError::Invalid { reference, reason } => {
                write!(f, "invalid reference '{}': {}", reference, reason)
            }
            DereferenceError::NotFound { reference } => {
                write!(f, "no component found at '{}'", reference)
            }
        }
    }
}

impl std::error::Error for DereferenceError {}

/// Produced by `validate` when a component violates a structural rule.
///
/// Not an exception: validation accumulates every violation it finds and
/// attributes each to the offending field path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of validation: all violations found in a single pass.
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeError {
    pub message: String,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SerializeError {}

/// Combined error type for the `load` entry point.
#[derive(Clone, Debug)]
pub enum AsyncApiError {
    Parse(ParseError),
    Validation(ValidationError),
}

impl fmt::Display for AsyncApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsyncApiError::Parse(e) => write!(f, "Parse error: {}", e),
            AsyncApiError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for AsyncApiError {}
