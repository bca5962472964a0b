//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs default to stderr so they
//! never interleave with command output on stdout.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Disable to install no subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

pub(crate) const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (CMDKIT_LOG, CMDKIT_LOG_FORMAT, CMDKIT_LOG_OUTPUT)
/// 2. Config as assembled by the caller (CLI flags over config file)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), CommandError> {
    if config.is_some_and(|c| !c.enabled) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let result = match (format, output) {
        (LogFormat::Json, LogOutput::File(path)) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(open_log_file(&path)?),
            )
            .try_init(),
        (LogFormat::Json, LogOutput::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (LogFormat::Text, LogOutput::File(path)) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(open_log_file(&path)?),
            )
            .try_init(),
        (LogFormat::Text, LogOutput::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| CommandError::LoggingError(e.to_string()))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, CommandError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CommandError::LoggingError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CommandError::LoggingError(format!("Failed to open log file {:?}: {}", path, e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, CommandError> {
    if let Ok(filter) = EnvFilter::try_from_env("CMDKIT_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| CommandError::LoggingError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<LogFormat, CommandError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(CommandError::LoggingError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

/// Determine output format from environment or config
fn determine_format(config: Option<&LoggingConfig>) -> Result<LogFormat, CommandError> {
    if let Ok(format) = std::env::var("CMDKIT_LOG_FORMAT") {
        if let Ok(parsed) = parse_format(&format) {
            return Ok(parsed);
        }
    }
    parse_format(config.map(|c| c.format.as_str()).unwrap_or("text"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File(PathBuf),
}

fn parse_output(output: &str, file: Option<&PathBuf>) -> Result<LogOutput, CommandError> {
    match (output, file) {
        ("stderr", _) => Ok(LogOutput::Stderr),
        ("file", Some(path)) => Ok(LogOutput::File(path.clone())),
        ("file", None) => Err(CommandError::LoggingError(
            "Log output 'file' requires a log file path".to_string(),
        )),
        _ => Err(CommandError::LoggingError(format!(
            "Invalid log output: {} (must be 'stderr' or 'file')",
            output
        ))),
    }
}

/// Determine output destination from environment or config
fn determine_output(config: Option<&LoggingConfig>) -> Result<LogOutput, CommandError> {
    let file = config.and_then(|c| c.file.as_ref());
    if let Ok(output) = std::env::var("CMDKIT_LOG_OUTPUT") {
        return parse_output(&output, file);
    }
    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr"), file)
}
