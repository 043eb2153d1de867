//! Error types for the Enrollment Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing an enrollment.

use thiserror::Error;

/// The main error type for the Enrollment Pricing Engine.
///
/// Bad optional input (a missing date, an unparsable person count) never ends
/// up here: the calculator skips the affected rule instead. Only precondition
/// violations and configuration problems are errors.
///
/// # Example
///
/// ```
/// use enrollment_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
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

    /// No course context was supplied, so no price is defined.
    #[error("No course selected: price is undefined")]
    MissingCourse,

    /// A scheduling field required for submission was not selected.
    #[error("Missing schedule field '{field}': select a start date and time")]
    MissingSchedule {
        /// The missing field (`date_start` or `time_start`).
        field: String,
    },

    /// A course id was not present in the catalog.
    #[error("Course not found: {course_id}")]
    CourseNotFound {
        /// The id that was looked up.
        course_id: u64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
