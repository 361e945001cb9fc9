//! Error type definitions

use thiserror::Error;

/// Errors produced while turning wire records into domain records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The raw record (or a nested collection inside it) does not have the expected shape,
    /// e.g. `null` where an object is required or an object where a list is required.
    #[error("Malformed {entity} payload: {message}")]
    MalformedInput {
        entity: &'static str,
        message: String,
    },

    /// A field is present but cannot be read as its domain type.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Payload text is not valid JSON.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The tracing subscriber could not be installed.
    #[error("Telemetry initialization error: {0}")]
    TelemetryInit(String),
}

impl ModelError {
    pub(crate) fn malformed(entity: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            entity,
            message: message.into(),
        }
    }

    /// Returns true for shape failures reported by a transformer.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Returns true when a field could not be read as its domain type.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }
}

/// Result type for invoicing-models operations
pub type Result<T> = std::result::Result<T, ModelError>;
