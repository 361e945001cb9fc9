//! Untyped wire records.
//!
//! Payloads arrive from the API as loosely typed JSON with snake_case keys. Keeping them
//! as `serde_json::Value` until a transformer reads them makes the boundary between
//! untrusted wire data and typed domain records explicit.

use serde_json::Value;

/// A raw record as received from the API, prior to transformation.
pub type RawRecord = Value;

/// The object form of a raw record.
pub type RawObject = serde_json::Map<String, Value>;

/// Short name of a JSON value's kind, used in error messages.
pub fn describe_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
