//! Location of the user configuration file.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const VENDOR_DIR: &str = ".ysocode";
const PACKAGE_DIR: &str = "commit";
const FILE_NAME: &str = "config.json";

/// Resolves `<home>/<vendor>/<package>/config.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    home: PathBuf,
    vendor_dir: String,
    package_dir: String,
}

impl ConfigPaths {
    pub fn new(
        home: impl Into<PathBuf>,
        vendor_dir: impl Into<String>,
        package_dir: impl Into<String>,
    ) -> Self {
        Self {
            home: home.into(),
            vendor_dir: vendor_dir.into(),
            package_dir: package_dir.into(),
        }
    }

    /// Paths rooted at the current user's home directory.
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(Self::under(home))
    }

    /// Default vendor/package layout under an arbitrary home.
    pub fn under(home: impl Into<PathBuf>) -> Self {
        Self::new(home, VENDOR_DIR, PACKAGE_DIR)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn dir(&self) -> PathBuf {
        self.home.join(&self.vendor_dir).join(&self.package_dir)
    }

    pub fn file(&self) -> PathBuf {
        self.dir().join(FILE_NAME)
    }
}
