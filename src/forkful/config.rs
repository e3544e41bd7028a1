use crate::error::{ForkfulError, Result};
use crate::photos::DEFAULT_PHOTO_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for forkful, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForkfulConfig {
    /// Photo extensions accepted on upload (e.g. "png", "jpg")
    #[serde(default = "default_photo_extensions")]
    pub photo_extensions: Vec<String>,
}

fn default_photo_extensions() -> Vec<String> {
    DEFAULT_PHOTO_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

impl Default for ForkfulConfig {
    fn default() -> Self {
        Self {
            photo_extensions: default_photo_extensions(),
        }
    }
}

impl ForkfulConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ForkfulError::Io)?;
        let config: ForkfulConfig =
            serde_json::from_str(&content).map_err(ForkfulError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ForkfulError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ForkfulError::Serialization)?;
        fs::write(config_path, content).map_err(ForkfulError::Io)?;
        Ok(())
    }

    pub fn get_photo_extensions(&self) -> &[String] {
        &self.photo_extensions
    }

    /// Set the accepted photo extensions (normalizes to lowercase, no dot)
    pub fn set_photo_extensions(&mut self, exts: &[String]) {
        self.photo_extensions = exts
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
    }

    /// Look up a config value by its key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "photo-exts" => Some(self.photo_extensions.join(", ")),
            _ => None,
        }
    }

    /// Set a config value by its key, parsing a comma-separated value
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "photo-exts" => {
                let exts: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().to_string())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if exts.is_empty() {
                    return Err("photo-exts needs at least one extension".to_string());
                }
                self.set_photo_extensions(&exts);
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
