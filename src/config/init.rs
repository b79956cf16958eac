//! Creating the user configuration file from the bundled stub.

use std::fs;

use tracing::debug;

use super::paths::ConfigPaths;
use crate::error::ConfigError;

/// Default configuration written by `commit init`.
pub const CONFIG_STUB: &str = include_str!("../../stubs/config.json");

/// Write the stub to the configuration path, creating its directory.
///
/// An existing file is only replaced when `force` is set.
pub fn create_configuration_file(paths: &ConfigPaths, force: bool) -> Result<(), ConfigError> {
    let dir = paths.dir();
    if !dir.is_dir() {
        debug!("Creating configuration directory {}", dir.display());
        fs::create_dir_all(&dir).map_err(ConfigError::CreateDirFailed)?;
    }

    let file = paths.file();
    if file.exists() && !force {
        return Err(ConfigError::AlreadyExists(file));
    }

    fs::write(&file, CONFIG_STUB).map_err(ConfigError::WriteFailed)?;
    Ok(())
}
