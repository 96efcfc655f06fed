//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// A required flag is missing or has no value after it
    #[error("Input error: {0}")]
    Argument(String),

    /// A flag value could not be parsed as the expected type
    #[error("Input error: {0}")]
    Format(String),

    /// The backing file could not be read or written
    #[error("File error: {0}")]
    Persistence(String),

    /// Persisted content is not a valid expense array
    #[error("JSON error: {0}")]
    Serialization(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExpenseError {
    /// Create an error for a flag that is absent or has no following value
    pub fn missing_argument(flag: &str) -> Self {
        Self::Argument(format!("Missing required argument: {}", flag))
    }

    /// Create an error for a flag value that cannot be parsed
    pub fn invalid_value(flag: &str, value: &str, expected: &str) -> Self {
        Self::Format(format!(
            "Invalid value '{}' for {}: expected {}",
            value, flag, expected
        ))
    }

    /// Check if this error was caused by user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Argument(_) | Self::Format(_) | Self::Validation(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
