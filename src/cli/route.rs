//! CLI route: builds the runner from configuration and dispatches raw arguments.

use crate::builtin;
use crate::config::{CmdkitConfig, ConfigLoader};
use crate::error::CommandError;
use crate::logging::LoggingConfig;
use crate::output::Sink;
use crate::runner::Runner;
use crate::style::Palette;

use super::parse::Cli;

/// Runtime context for one CLI invocation.
pub struct RunContext {
    config: CmdkitConfig,
    runner: Runner,
}

impl RunContext {
    /// Load configuration (explicit file or global) and apply CLI overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, CommandError> {
        let config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Self::new(apply_overrides(config, cli))
    }

    /// Validate the final configuration, CLI overrides included, and build the runner.
    pub fn new(config: CmdkitConfig) -> Result<Self, CommandError> {
        config.ensure_valid()?;
        let runner = builtin::runner(config.name.clone(), Palette::for_mode(config.color));
        runner.validate()?;
        Ok(Self { config, runner })
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }

    /// Dispatch raw command arguments through the runner.
    pub async fn execute(
        &self,
        args: &[String],
        out: &mut (dyn Sink + Send),
    ) -> Result<(), CommandError> {
        self.runner.run(args, out).await
    }
}

/// Precedence: CLI flags override config file override defaults.
pub fn apply_overrides(mut config: CmdkitConfig, cli: &Cli) -> CmdkitConfig {
    if cli.quiet {
        config.logging.enabled = false;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(color) = cli.color {
        config.color = color;
        config.logging.color = color != crate::style::ColorMode::Never;
    }
    config
}
