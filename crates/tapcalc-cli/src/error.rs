//! Error types for the CLI

use std::path::PathBuf;

use tapcalc::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Config file could not be parsed
    #[error("Failed to parse config file '{path}': {source}")]
    Yaml {
        /// File that failed
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Calculator error
    #[error("Calculator error: {0}")]
    Calc(#[from] CalcError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert_eq!(err.to_string(), "Invalid argument: bad arg");
    }

    #[test]
    fn test_calc_error_from() {
        let err: CliError = CalcError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Calculator error: Division by zero");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CliError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_yaml_error_names_path() {
        let source = serde_yaml_ng::from_str::<u8>("[").unwrap_err();
        let err = CliError::Yaml {
            path: PathBuf::from("tapcalc.yaml"),
            source,
        };
        assert!(err.to_string().contains("tapcalc.yaml"));
    }
}
