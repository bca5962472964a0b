//! Config loader facade.

use super::merge_policy::builder_with_defaults;
use super::sources;
use super::CmdkitConfig;
use crate::error::CommandError;
use std::path::Path;
use tracing::debug;

/// Assembles [`CmdkitConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file, then environment.
    pub fn load() -> Result<CmdkitConfig, CommandError> {
        let builder = sources::add_global_file(builder_with_defaults()?);
        let config = sources::add_environment(builder).build()?;
        Self::finish(config)
    }

    /// Defaults, then `path`, then environment. The global file is skipped.
    pub fn load_from_file(path: &Path) -> Result<CmdkitConfig, CommandError> {
        let builder = sources::add_file(builder_with_defaults()?, path)?;
        let config = sources::add_environment(builder).build()?;
        debug!(config_path = %path.display(), "loaded config file");
        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<CmdkitConfig, CommandError> {
        let config: CmdkitConfig = config.try_deserialize()?;
        config.ensure_valid()?;
        Ok(config)
    }
}
