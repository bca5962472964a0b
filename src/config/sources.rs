//! Config sources: global file, explicit file, environment.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to the global config file, e.g. `$XDG_CONFIG_HOME/cmdkit/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cmdkit").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file if it exists.
pub fn add_global_file(
    builder: ConfigBuilder<DefaultState>,
) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) if path.exists() => builder.add_source(File::from(path).required(false)),
        Some(path) => {
            debug!(config_path = %path.display(), "no global config file");
            builder
        }
        None => builder,
    }
}

/// Add an explicit config file. Missing files are an error.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Message(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}

/// Add `CMDKIT__*` environment overrides (`CMDKIT__LOGGING__LEVEL=debug`).
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(Environment::with_prefix("CMDKIT").separator("__"))
}
