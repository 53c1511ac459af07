// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitgate.
//!
//! Problems with the messages being checked are never errors here: they are
//! reported as findings. These types cover the fatal cases only, such as a
//! bad configuration or an unreadable input file.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors in the messages handed to the checker.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read '{source_name}': {message}")]
    ReadFailed { source_name: String, message: String },

    #[error("Invalid batch file '{source_name}': {message}")]
    InvalidBatch { source_name: String, message: String },
}

/// Result type alias for commitgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "max_subject_length".to_string(),
            message: "must be between 1 and 1000".to_string(),
        };
        assert!(err.to_string().contains("max_subject_length"));
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_gate_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            message: "unknown field `colour`".to_string(),
        };
        let err: GateError = config_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = io.context("read message").unwrap_err();
        assert_eq!(err.to_string(), "read message: no such file");
    }
}
