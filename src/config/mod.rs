//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/gottengeo/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::format::SummaryStyle;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gazetteer location
    #[serde(default)]
    pub gazetteer: GazetteerConfig,

    /// Default values for commands
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Summary formatting
    #[serde(default)]
    pub summary: SummaryConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Gazetteer location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteerConfig {
    /// Path to cities.txt; the data directory copy is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Default values for commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Summary formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Joiner for place names
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Joiner for long place names
    #[serde(default = "default_multiline_separator")]
    pub multiline_separator: String,

    /// Combined name length before switching to the multi-line joiner
    #[serde(default = "default_multiline_threshold")]
    pub multiline_threshold: usize,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
fn default_multiline_separator() -> String {
    DEFAULT_MULTILINE_SEPARATOR.to_string()
}
fn default_multiline_threshold() -> usize {
    DEFAULT_MULTILINE_THRESHOLD
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://maps.google.com/maps?q={lat},{lng}".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=15/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}".to_string(),
    );
    providers
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            multiline_separator: default_multiline_separator(),
            multiline_threshold: default_multiline_threshold(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Resolved gazetteer path
    ///
    /// Falls back to `cities.txt` in the XDG data directory.
    pub fn gazetteer_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.gazetteer.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|p| p.join(APP_DIR_NAME).join(GAZETTEER_FILE_NAME))
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))
    }

    /// Summary style built from the `[summary]` section
    pub fn summary_style(&self) -> SummaryStyle {
        SummaryStyle {
            separator: self.summary.separator.clone(),
            multiline_separator: self.summary.multiline_separator.clone(),
            multiline_threshold: self.summary.multiline_threshold,
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["gazetteer", "path"] => self
                .gazetteer_path()
                .ok()
                .map(|p| p.display().to_string()),

            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["summary", "separator"] => Some(self.summary.separator.clone()),
            ["summary", "multiline_separator"] => Some(self.summary.multiline_separator.clone()),
            ["summary", "multiline_threshold"] => {
                Some(self.summary.multiline_threshold.to_string())
            }

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["gazetteer", "path"] => {
                self.gazetteer.path = Some(PathBuf::from(value));
            }

            ["defaults", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown format: {}", value)));
                }
                self.defaults.format = value.to_string();
            }

            ["summary", "separator"] => {
                self.summary.separator = value.to_string();
            }
            ["summary", "multiline_separator"] => {
                self.summary.multiline_separator = value.to_string();
            }
            ["summary", "multiline_threshold"] => {
                self.summary.multiline_threshold = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid threshold value: {}", value))
                })?;
            }

            ["url", "default"] => {
                if !self.url.providers.contains_key(value) {
                    return Err(Error::Config(format!("Unknown URL provider: {}", value)));
                }
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "gazetteer.path",
            "defaults.format",
            "summary.separator",
            "summary.multiline_separator",
            "summary.multiline_threshold",
            "url.default",
        ]
    }

    /// Format a URL using the specified provider
    ///
    /// Replaces {lat} and {lng} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self.url.providers.get(provider_name).ok_or_else(|| {
            Error::Config(format!("Unknown URL provider: {}", provider_name))
        })?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string()))
    }
}
