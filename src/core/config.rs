use serde::Deserialize;
use std::collections::HashMap;

use super::charset::{Charset, DEFAULT_MARKER, DEFAULT_MAX_CODE_LENGTH};
use crate::encoders::algorithms::errors::{ConfigError, CharsetNotFoundError, find_closest_charset};

/// Name used when neither the caller nor the settings pick a charset.
pub const FALLBACK_CHARSET: &str = "default";

/// Configuration for a single charset loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CharsetConfig {
    /// Symbols in digit order
    pub chars: String,
    /// Single character announcing a width change
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Maximum digits per unit
    #[serde(default = "default_max_code_length")]
    pub max_code_length: u8,
    /// Free-form description shown by `config show`
    #[serde(default)]
    pub description: Option<String>,
}

impl CharsetConfig {
    /// The marker as a single character.
    pub fn marker_char(&self) -> Result<char, ConfigError> {
        let mut chars = self.marker.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => Ok(marker),
            (Some(marker), Some(_)) => Err(ConfigError::invalid_marker(
                marker,
                format!("marker {:?} must be a single character", self.marker),
            )),
            (None, _) => Err(ConfigError::invalid_marker(
                0u32,
                "marker cannot be empty",
            )),
        }
    }

    /// Validates this entry and builds the table.
    pub fn build(&self) -> Result<Charset, ConfigError> {
        Charset::builder()
            .chars(self.chars.as_str())
            .marker_char(self.marker_char()?)
            .max_code_length(self.max_code_length)
            .build()
    }
}

fn default_marker() -> String {
    (DEFAULT_MARKER as char).to_string()
}

fn default_max_code_length() -> u8 {
    DEFAULT_MAX_CODE_LENGTH
}

/// Global settings for ascbin.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Charset used when none is named on the command line
    #[serde(default)]
    pub default_charset: Option<String>,
}

/// Collection of charset configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CharsetRegistry {
    /// Map of charset names to their configurations
    #[serde(default)]
    pub charsets: HashMap<String, CharsetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CharsetRegistry {
    /// Parses charset configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in charset configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../charsets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in charsets (from library)
    /// 2. `~/.config/ascbin/charsets.toml` (user overrides)
    /// 3. `./charsets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching charset names.
    /// Override files that fail to load are logged and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("ascbin").join("charsets.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(std::path::Path::new("charsets.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("loaded charset overrides from {:?}", path);
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load charset config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Charsets from `other` override charsets with the same name in `self`,
    /// and a default charset set in `other` replaces ours.
    pub fn merge(&mut self, other: CharsetRegistry) {
        for (name, charset) in other.charsets {
            self.charsets.insert(name, charset);
        }
        if other.settings.default_charset.is_some() {
            self.settings.default_charset = other.settings.default_charset;
        }
    }

    /// Retrieves a charset configuration by name.
    pub fn get_charset(&self, name: &str) -> Option<&CharsetConfig> {
        self.charsets.get(name)
    }

    /// Charset names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.charsets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name of the charset to use when none is given.
    pub fn default_name(&self) -> &str {
        self.settings
            .default_charset
            .as_deref()
            .unwrap_or(FALLBACK_CHARSET)
    }

    /// Builds the named charset.
    ///
    /// Unknown names produce a [`CharsetNotFoundError`] with a suggestion;
    /// invalid entries produce the [`ConfigError`] from validation.
    pub fn build(&self, name: &str) -> Result<Charset, Box<dyn std::error::Error>> {
        let charset_config = self.get_charset(name).ok_or_else(|| {
            let suggestion = find_closest_charset(name, &self.names());
            CharsetNotFoundError::new(name, suggestion)
        })?;
        Ok(charset_config.build()?)
    }
}
