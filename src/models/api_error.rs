//! Error bodies returned by the API.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body of a failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (Some(code), None) => f.write_str(code),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unknown API error"),
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorWire {
    code: Option<String>,
    message: Option<String>,
    details: Option<serde_json::Value>,
}

impl From<ApiErrorWire> for ApiError {
    fn from(wire: ApiErrorWire) -> Self {
        Self {
            code: wire.code,
            message: wire.message,
            details: wire.details,
        }
    }
}

record_transformer!(
    ApiErrorTransformer,
    "error",
    ApiErrorWire => ApiError,
    transform_error_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn displays_code_and_message() {
        let err = transform_error_response(&json!({
            "code": "not_found",
            "message": "Project group does not exist",
            "details": { "id": "g9" }
        }))
        .unwrap();
        assert_eq!(err.to_string(), "not_found: Project group does not exist");
        assert_eq!(err.details, Some(json!({ "id": "g9" })));
    }

    #[test]
    fn empty_body_has_fallback_text() {
        let err = transform_error_response(&json!({})).unwrap();
        assert_eq!(err.to_string(), "unknown API error");
    }
}
