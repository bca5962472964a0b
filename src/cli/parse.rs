//! CLI parse: clap types for cmdkit. No behavior; definitions only.

use crate::style::ColorMode;
use clap::Parser;
use std::path::PathBuf;

/// cmdkit - subcommand runner with built-in help
#[derive(Parser, Debug)]
#[command(name = "cmdkit")]
#[command(about = "Subcommand runner with an introspecting help command")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Configuration file path (overrides global config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// When to color output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Command name followed by its arguments and options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
