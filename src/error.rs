//! Error types for the pension calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating inputs,
//! performing calculations, and loading configuration.

use thiserror::Error;

/// The main error type for the pension calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pension_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "years".to_string(),
///     message: "must be a non-negative integer".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid field 'years': must be a non-negative integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An input field was missing, malformed, or outside its permitted range.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An arithmetic operation could not be performed, such as a division
    /// by an exact zero or a result outside the representable range.
    #[error("Arithmetic error: {message}")]
    Arithmetic {
        /// A description of the failed operation.
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

    /// A CSV row source could not be read.
    #[error("Failed to read CSV input: {message}")]
    CsvRead {
        /// A description of the read failure.
        message: String,
    },
}

/// Coarse classification of an [`EngineError`].
///
/// Callers use this to tell invalid input apart from failures inside the
/// engine's arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied invalid input.
    Validation,
    /// The calculation itself could not be completed.
    Arithmetic,
    /// The engine configuration could not be loaded.
    Config,
    /// A raw input source could not be read.
    Input,
}

impl EngineError {
    /// Creates a validation error for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an arithmetic error.
    pub fn arithmetic(message: impl Into<String>) -> Self {
        EngineError::Arithmetic {
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Validation { .. } => ErrorKind::Validation,
            EngineError::Arithmetic { .. } => ErrorKind::Arithmetic,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
            EngineError::CsvRead { .. } => ErrorKind::Input,
        }
    }

    /// Returns true if this error was caused by invalid input.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
