// src/config/mod.rs
pub mod types;

pub use self::types::{Config, DataPaths, DisplayConfig};

use crate::error::{LarderError, Result};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "larder.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `larder.toml` from the current directory, falling back to
    /// defaults when the file is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LarderError::from(e).at(path))?;
        let mut config = Self::parse_toml(&content)?;
        config.resolve_relative_to(path.parent().unwrap_or(Path::new("")));
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration text without touching the filesystem.
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML for this schema.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error when a display knob would make listings meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.display.page_size == 0 {
            return Err(LarderError::Other("display.page_size must be > 0".into()));
        }
        if self.display.browse_limit == 0 {
            return Err(LarderError::Other("display.browse_limit must be > 0".into()));
        }
        Ok(())
    }

    /// Data paths in a config file are relative to the file itself.
    fn resolve_relative_to(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        let data = &mut self.data;
        for path in [
            &mut data.recipes,
            &mut data.vocabulary,
            &mut data.prices,
            &mut data.reviews,
        ] {
            if path.is_relative() {
                let joined = base.join(&*path);
                *path = joined;
            }
        }
    }
}
