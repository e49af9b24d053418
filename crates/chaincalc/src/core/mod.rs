//! Core calculator engine
//!
//! Error prevention: digits and operators are validated types, so the
//! engine's action methods are total and never return an error.

pub mod engine;
pub mod format;
pub mod history;
mod operand;
mod operations;

pub use engine::{Calculator, EntryPhase, Readout};
pub use history::{Chain, ChainEntry};
pub use operand::Operand;
pub use operations::{Digit, Operator};

use thiserror::Error;

/// Result type for the crate's fallible seams
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised outside the engine: input validation, configuration and I/O.
///
/// Engine actions never produce these; a malformed operand is an
/// invariant violation and panics instead.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A digit value outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// A character that is not one of `+ - * /`
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(char),

    /// A key or token with no calculator action
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown action error
    #[must_use]
    pub fn unknown_action(token: impl Into<String>) -> Self {
        Self::UnknownAction(token.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_invalid_digit() {
        let err = CalcError::InvalidDigit(12);
        assert_eq!(format!("{err}"), "Invalid digit: 12 (expected 0-9)");
    }

    #[test]
    fn test_calc_error_display_unknown_operator() {
        let err = CalcError::UnknownOperator('^');
        assert_eq!(format!("{err}"), "Unknown operator: '^'");
    }

    #[test]
    fn test_calc_error_display_unknown_action() {
        let err = CalcError::unknown_action("x");
        assert_eq!(format!("{err}"), "Unknown action: x");
    }

    #[test]
    fn test_calc_error_display_config() {
        let err = CalcError::config("missing file");
        assert_eq!(format!("{err}"), "Configuration error: missing file");
    }

    #[test]
    fn test_calc_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CalcError = io.into();
        assert!(matches!(err, CalcError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_calc_error_from_json() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: CalcError = json_err.into();
        assert!(matches!(err, CalcError::Json(_)));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::InvalidDigit(10));
        assert!(err.to_string().contains("digit"));
    }
}
