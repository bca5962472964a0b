//! Configuration System
//!
//! Layered configuration for the `cmdkit` binary: built-in defaults, the global
//! config file, an explicit `--config` file, then `CMDKIT__*` environment
//! variables. CLI flags are applied on top by the binary.

use crate::error::CommandError;
use crate::logging::{LoggingConfig, LOG_LEVELS};
use serde::{Deserialize, Serialize};

mod facade;
mod merge_policy;
mod sources;

pub use crate::style::ColorMode;
pub use facade::ConfigLoader;
pub use sources::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CmdkitConfig {
    /// Tool name shown in usage examples
    #[serde(default = "default_name")]
    pub name: String,

    /// When to style help output
    #[serde(default)]
    pub color: ColorMode,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_name() -> String {
    "cmdkit".to_string()
}

impl Default for CmdkitConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            color: ColorMode::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Name(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Name(msg) => write!(f, "Name: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CmdkitConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::Name("Tool name cannot be empty".to_string()));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        for (module, level) in &self.logging.modules {
            if !LOG_LEVELS.contains(&level.as_str()) {
                errors.push(ValidationError::Logging(format!(
                    "Unknown log level '{}' for module '{}'",
                    level, module
                )));
            }
        }
        if self.logging.format != "text" && self.logging.format != "json" {
            errors.push(ValidationError::Logging(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// [`validate`](Self::validate), folded into a single configuration error.
    pub fn ensure_valid(&self) -> Result<(), CommandError> {
        self.validate().map_err(|errors| {
            CommandError::ConfigError(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }
}
