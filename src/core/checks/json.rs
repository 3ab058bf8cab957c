use crate::utils::error::{HarnessError, Result};
use serde_json::Value;

/// Parse bytes as JSON and require a non-empty array or an object with at
/// least one key. Malformed content and empty shapes both surface as
/// ParseError; the caller treats that as a failed assertion.
pub fn parse_non_empty(bytes: &[u8]) -> Result<Value> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| HarnessError::ParseError {
            reason: format!("invalid JSON: {}", e),
        })?;

    match &value {
        Value::Array(items) if !items.is_empty() => Ok(value),
        Value::Object(map) if !map.is_empty() => Ok(value),
        Value::Array(_) => Err(HarnessError::ParseError {
            reason: "JSON array is empty".to_string(),
        }),
        Value::Object(_) => Err(HarnessError::ParseError {
            reason: "JSON object has no keys".to_string(),
        }),
        other => Err(HarnessError::ParseError {
            reason: format!("expected JSON array or object, got {}", shape_name(other)),
        }),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
