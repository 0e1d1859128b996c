use std::fs;
use std::path::{Path, PathBuf};

use crate::image::{OutputColor, PngCompression, DEFAULT_THRESHOLD};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MonochromeConfig {
    // Channel means strictly above this become white
    pub threshold: u8,
    pub png_compression: PngCompression,
    pub color: OutputColor,
}

impl Default for MonochromeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            png_compression: PngCompression::Default,
            color: OutputColor::Rgb,
        }
    }
}

impl MonochromeConfig {
    /// Load the user's saved defaults, if any
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let config = fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok());

        if config.is_some() {
            log::debug!("Loaded config from {}", path.display());
        }
        config
    }

    pub fn save(&self) -> Option<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Some(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Option<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }

        serde_json::to_string_pretty(self)
            .ok()
            .and_then(|json| fs::write(path, json).ok())
    }

    pub fn config_path() -> Option<PathBuf> {
        #[allow(deprecated)]
        let home = std::env::home_dir()?;
        Some(home.join(".config").join("monochrome").join("config.json"))
    }
}
