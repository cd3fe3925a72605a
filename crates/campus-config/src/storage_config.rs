use crate::{ConfigError, ConfigErrorResult, DEFAULT_CREDENTIALS_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Credentials file, relative to the config directory.
    pub credentials_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credentials_file: DEFAULT_CREDENTIALS_FILENAME.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.credentials_file);
        if path.is_absolute() || self.credentials_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.credentials_file must be relative and cannot contain '..'",
            ));
        }
        if self.credentials_file.is_empty() {
            return Err(ConfigError::storage(
                "storage.credentials_file cannot be empty",
            ));
        }
        Ok(())
    }
}
