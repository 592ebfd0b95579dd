//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around attendance reporting.
//! The aggregators themselves never fail; errors come from configuration,
//! request validation and export.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/server.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/server.yaml");
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

    /// A reporting period ends before it starts.
    #[error("Invalid report period: {start_date} is after {end_date}")]
    InvalidPeriod {
        /// The requested first day.
        start_date: NaiveDate,
        /// The requested last day.
        end_date: NaiveDate,
    },

    /// A punch field could not be interpreted.
    #[error("Invalid punch field '{field}': {message}")]
    InvalidPunch {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An `H:MM` duration could not be parsed.
    #[error("Invalid hours value '{value}': expected H:MM")]
    InvalidHours {
        /// The text that failed to parse.
        value: String,
    },

    /// Writing a CSV export failed.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::ExportError {
            message: error.to_string(),
        }
    }
}
