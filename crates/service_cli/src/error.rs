//! CLI error type.

use billing_core::types::DateError;
use billing_schedule::interval::{IntervalError, RangeError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A required interval argument was given neither on the command line
    /// nor in the configuration file.
    #[error("Missing required argument: --{0}")]
    MissingArgument(&'static str),

    /// A date argument could not be parsed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The interval or occurrence number is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested date is out of range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Writing results failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IntervalError> for CliError {
    fn from(err: IntervalError) -> Self {
        match err {
            IntervalError::Validation(e) => CliError::Validation(e),
            IntervalError::Range(e) => CliError::Range(e),
        }
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
