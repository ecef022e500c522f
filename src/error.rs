//! Error types for the Staffing Savings Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data
//! and serving calculations. The savings formulas themselves never fail.

use thiserror::Error;

use crate::models::OrganizationKind;

/// The main error type for the Staffing Savings Engine.
///
/// # Example
///
/// ```
/// use savings_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/calculator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A reference dataset could not be opened.
    #[error("Dataset not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A row of a reference dataset could not be parsed.
    #[error("Failed to parse dataset '{path}' at row {row}: {message}")]
    DatasetParseError {
        /// The dataset path.
        path: String,
        /// The 1-based data row (header excluded).
        row: u64,
        /// A description of the parse error.
        message: String,
    },

    /// Two rows of the same table share an identifier.
    #[error("Duplicate {kind} identifier: {id}")]
    DuplicateOrganization {
        /// The table the duplicate was found in.
        kind: OrganizationKind,
        /// The repeated identifier.
        id: String,
    },

    /// No organization with the given identifier exists.
    #[error("{kind} not found: {id}")]
    OrganizationNotFound {
        /// The table that was searched.
        kind: OrganizationKind,
        /// The identifier that was not found.
        id: String,
    },

    /// A caller-supplied value was rejected.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
