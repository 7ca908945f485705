//! Error types for the Wage Comparison Engine.
//!
//! The calculation functions themselves never fail: every numeric path clamps
//! to a safe default. These errors cover the edges of the crate, namely
//! configuration loading, HTTP request validation and explicit lookups.

use thiserror::Error;

/// The main error type for the Wage Comparison Engine.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
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

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A request field was outside the range the service accepts.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A FIFO roster id was not recognised.
    #[error("FIFO roster not found: {id}")]
    RosterNotFound {
        /// The roster id that was requested.
        id: String,
    },

    /// An overtime multiplier id was not recognised.
    #[error("Overtime multiplier not found: {id}")]
    MultiplierNotFound {
        /// The multiplier id that was requested.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
