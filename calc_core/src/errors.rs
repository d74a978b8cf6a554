//! # Error Types
//!
//! Structured error types for calc_core. The calculator arithmetic itself
//! never fails; these errors cover the fallible edges around it: parsing raw
//! input text, loading the content document, and the consent file.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
//!     if !value.is_finite() {
//!         return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_finite("people", f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be used (not a number, not finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A field name that is not one of the four calculator inputs
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// The content document is malformed or inconsistent
    #[error("Content error: {reason}")]
    ContentError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            field: field.into(),
        }
    }

    /// Create a ContentError
    pub fn content(reason: impl Into<String>) -> Self {
        CalcError::ContentError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::ContentError { .. } => "CONTENT_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("people", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_field("weight").error_code(), "UNKNOWN_FIELD");
        assert_eq!(CalcError::content("no fields").error_code(), "CONTENT_ERROR");
        assert_eq!(
            CalcError::file_error("read", "/tmp/x", "denied").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_field("weight");
        assert_eq!(error.to_string(), "Unknown field: weight");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
