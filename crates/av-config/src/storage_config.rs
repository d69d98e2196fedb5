use crate::DEFAULT_UPLOAD_DIRECTORY;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Upload directory, relative to the config directory
    pub upload_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: String::from(DEFAULT_UPLOAD_DIRECTORY),
        }
    }
}
