//! Error types for the Tuition Quote Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading data and configuration.
//! Outcomes such as "no matching record" or "installment unavailable" are
//! not errors and are modelled as result variants instead.

use thiserror::Error;

/// The main error type for the Tuition Quote Engine.
///
/// # Example
///
/// ```
/// use tuition_engine::error::QuoteError;
///
/// let error = QuoteError::DataFileNotFound {
///     path: "/missing/fees.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tuition data file not found: /missing/fees.json");
/// ```
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The record collection was not a non-empty collection of records.
    #[error("Invalid tuition data: {message}")]
    InvalidData {
        /// A description of what made the data invalid.
        message: String,
    },

    /// Every record was filtered out as incomplete.
    #[error("Tuition catalog is empty after filtering incomplete records")]
    EmptyCatalog,

    /// The tuition data file could not be read.
    #[error("Tuition data file not found: {path}")]
    DataFileNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// The tuition data file was not valid JSON.
    #[error("Failed to parse tuition data file '{path}': {message}")]
    DataParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

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

    /// A value outside one of the fixed option sets.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidOption {
        /// The field the value was given for.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// An admit year that is not a positive integer.
    #[error("Invalid admit year: {value}")]
    InvalidAdmitYear {
        /// The rejected textual value.
        value: String,
    },
}

/// A type alias for Results that return QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;
