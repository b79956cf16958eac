//! JSON-backed user configuration with dotted-key access.
//!
//! Every read loads the whole file and every write replaces it. There is no
//! locking: two concurrent invocations can lose one another's update.

use std::fs;
use std::io::Write;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use super::paths::ConfigPaths;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    paths: ConfigPaths,
}

impl ConfigStore {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Read the whole document. The root must be a JSON object.
    pub fn load(&self) -> Result<Map<String, Value>, ConfigError> {
        self.ensure_exists()?;

        let file = self.paths.file();
        let contents = fs::read_to_string(&file).map_err(ConfigError::ReadFailed)?;
        let value: Value = serde_json::from_str(&contents).map_err(ConfigError::Malformed)?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Replace the whole document, pretty-printed, via temp file and rename.
    pub fn save(&self, data: &Map<String, Value>) -> Result<(), ConfigError> {
        self.ensure_exists()?;

        let mut encoded =
            serde_json::to_string_pretty(data).map_err(ConfigError::EncodeFailed)?;
        encoded.push('\n');

        let dir = self.paths.dir();
        let mut tmp = NamedTempFile::new_in(&dir).map_err(ConfigError::WriteFailed)?;
        tmp.write_all(encoded.as_bytes())
            .map_err(ConfigError::WriteFailed)?;
        tmp.persist(self.paths.file())
            .map_err(|e| ConfigError::WriteFailed(e.error))?;

        debug!("Wrote user configuration to {}", self.paths.file().display());
        Ok(())
    }

    /// Look up a dotted key such as `ai_providers.cohere.api_key`.
    pub fn get_value(&self, key: &str) -> Result<Value, ConfigError> {
        let data = self.load()?;
        let mut segments = key.split('.');

        let first = segments.next().unwrap_or_default();
        let mut current = data
            .get(first)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        for segment in segments {
            current = current
                .as_object()
                .and_then(|obj| obj.get(segment))
                .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;
        }

        Ok(current.clone())
    }

    /// Overwrite the value at an existing dotted key.
    ///
    /// Missing keys are never created; the file is only rewritten once the
    /// whole path resolved.
    pub fn set_value(&self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut data = self.load()?;
        let not_found = || ConfigError::KeyNotFound(key.to_string());

        let segments: Vec<&str> = key.split('.').collect();
        let (last, parents) = segments.split_last().ok_or_else(not_found)?;

        let mut current = &mut data;
        for segment in parents {
            current = current
                .get_mut(*segment)
                .and_then(Value::as_object_mut)
                .ok_or_else(not_found)?;
        }

        let slot = current.get_mut(*last).ok_or_else(not_found)?;
        *slot = value;

        self.save(&data)
    }

    fn ensure_exists(&self) -> Result<(), ConfigError> {
        let dir = self.paths.dir();
        if !dir.is_dir() {
            return Err(ConfigError::DirectoryMissing(dir));
        }

        let file = self.paths.file();
        if !file.is_file() {
            return Err(ConfigError::FileMissing(file));
        }

        Ok(())
    }
}
