//! Error types for the payroll deduction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading and validating
//! statutory rate configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll deduction engine.
///
/// The deduction calculators themselves are total functions and never fail;
/// every fallible operation in the engine concerns statutory configuration,
/// and returns this error type.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// No deduction schedule is effective on or before the given date.
    #[error("No deduction schedule effective on or before {date}")]
    ScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// A deduction schedule failed validation.
    #[error("Invalid deduction schedule section '{section}': {message}")]
    InvalidSchedule {
        /// The schedule section that failed validation.
        section: String,
        /// A description of what made the section invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
