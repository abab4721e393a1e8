//! [`AsyncApi`] → YAML/JSON serialization.

use crate::error::SerializeError;
use crate::types::AsyncApi;

/// Serialize a document to a YAML string.
///
/// Fields are emitted in specification order: `asyncapi` first, then
/// `info`, the root collections, and `components`.
pub fn serialize(doc: &AsyncApi) -> Result<String, SerializeError> {
    // Convert to serde_json::Value first for consistent field ordering
    let value = serde_json::to_value(doc).map_err(|e| SerializeError {
        message: format!("failed to convert document to JSON value: {}", e),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}

/// Serialize a document to pretty-printed JSON.
pub fn serialize_json(doc: &AsyncApi) -> Result<String, SerializeError> {
    serde_json::to_string_pretty(doc).map_err(|e| SerializeError {
        message: format!("failed to serialize to JSON: {}", e),
    })
}
