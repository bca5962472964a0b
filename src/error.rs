//! Error types for the command runner.

use thiserror::Error;

/// Errors surfaced by command registration, dispatch, and the ambient stack.
///
/// Asking `help` about an unknown command is not one of them: that path
/// recovers by printing the catalog.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Command '{name}' failed: {message}")]
    CommandFailed { name: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl From<config::ConfigError> for CommandError {
    fn from(err: config::ConfigError) -> Self {
        CommandError::ConfigError(err.to_string())
    }
}
