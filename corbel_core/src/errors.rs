//! # Error Types
//!
//! Structured error types for corbel_core. Each variant carries enough
//! context for a front end to tell the user which value to fix, and the whole
//! enum serializes to JSON for tooling that consumes the CLI output.
//!
//! ## Example
//!
//! ```rust
//! use corbel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(b_m: f64) -> CalcResult<()> {
//!     if b_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "b_m".to_string(),
//!             value: b_m.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for corbel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, negative, not finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The cover is not smaller than the total depth, so the lever arm is not positive
    #[error("Invalid geometry: h = {h_m} m, d1 = {d1_m} m - {reason}")]
    InvalidGeometry { h_m: f64, d1_m: f64, reason: String },

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

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(h_m: f64, d1_m: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            h_m,
            d1_m,
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

    /// True for errors caused by the calculation inputs rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::InvalidGeometry { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
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

impl From<csv::Error> for CalcError {
    fn from(e: csv::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for CalcError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        CalcError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fck_mpa", "-5", "Concrete strength must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_geometry(0.15, 0.15, "d1 >= h").error_code(), "INVALID_GEOMETRY");
        assert_eq!(CalcError::file_error("write", "x.csv", "denied").error_code(), "FILE_ERROR");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_input("b_m", "0", "x").is_input_error());
        assert!(CalcError::invalid_geometry(0.1, 0.2, "x").is_input_error());
        assert!(!CalcError::serialization("x").is_input_error());
    }

    #[test]
    fn test_geometry_message() {
        let error = CalcError::invalid_geometry(0.15, 0.15, "Cover must be smaller than depth");
        assert_eq!(
            error.to_string(),
            "Invalid geometry: h = 0.15 m, d1 = 0.15 m - Cover must be smaller than depth"
        );
    }
}
