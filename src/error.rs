//! Error types for the Activity Engine.
//!
//! Classification itself never fails: malformed fields degrade to zero or to
//! "invalid". These errors cover the surrounding surface only, namely
//! configuration loading and request validation.

use thiserror::Error;

/// The main error type for the Activity Engine.
///
/// # Example
///
/// ```
/// use activity_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A bounded date range was requested without an anchor date.
    #[error("An anchor date is required for the '{range}' range")]
    MissingAnchorDate {
        /// The requested range.
        range: String,
    },

    /// An activity record was rejected before classification.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
