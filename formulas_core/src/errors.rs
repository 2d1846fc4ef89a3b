//! # Error Types
//!
//! Structured error types for formulas_core. Calculators never panic on bad
//! input; every rejection comes back as a `CalcError` value that names the
//! offending field(s), so a front-end can highlight exactly what to fix.
//!
//! ## Example
//!
//! ```rust
//! use formulas_core::errors::{CalcError, CalcResult};
//!
//! fn validate_lots(lots: f64) -> CalcResult<()> {
//!     if lots <= 0.0 {
//!         return Err(CalcError::out_of_range("lots", lots.to_string(), "Lots must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_lots(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formulas_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Coarse classification of a [`CalcError`].
///
/// The first three are the calculator validation taxonomy; everything else
/// (unknown ids, config files) falls under `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MissingField,
    OutOfRange,
    DivisionByZero,
    Other,
}

/// Structured error type for calculator and catalog operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required input was empty or could not be read as a finite number
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A value violates a domain constraint
    #[error("Out of range for '{field}': {value} - {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// A computed denominator is zero
    #[error("Division by zero: {} evaluates to 0", fields.join(" x "))]
    DivisionByZero { fields: Vec<String> },

    /// Calculator id not present in the registry
    #[error("Unknown calculator: {id}")]
    UnknownCalculator { id: String },

    /// Settings file could not be read or is inconsistent
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error naming the fields that make up the denominator
    pub fn division_by_zero<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CalcError::DivisionByZero {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { id: id.into() }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Taxonomy bucket for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::MissingField { .. } => ErrorKind::MissingField,
            CalcError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CalcError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            _ => ErrorKind::Other,
        }
    }

    /// Input fields this error points at (empty for non-input errors)
    pub fn fields(&self) -> Vec<&str> {
        match self {
            CalcError::MissingField { field } | CalcError::OutOfRange { field, .. } => vec![field.as_str()],
            CalcError::DivisionByZero { fields } => fields.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
