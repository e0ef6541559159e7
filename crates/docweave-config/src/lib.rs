//! Docweave Config
//!
//! This crate handles configuration loading and management for
//! docweave, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/docweave/config.toml`
//! - macOS: `~/Library/Application Support/docweave/config.toml`
//! - Windows: `%APPDATA%\docweave\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use docweave_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file or inline TOML
//! let config = Config::load_with_override(Some("[syntax]\nMarker = \"#\"")).unwrap();
//! ```

mod markup;
mod syntax;

pub use markup::MarkupConfig;
pub use syntax::SyntaxConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use docweave_core::{DocweaveError, Result};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[syntax]
Marker   = ";"
Language = "scheme"

[markup]
Prologue = true
ClassTag = "program"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host-syntax configuration
    #[serde(default)]
    pub syntax: SyntaxConfig,

    /// Output-markup configuration
    #[serde(default)]
    pub markup: MarkupConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use docweave_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[syntax]"));
    /// assert!(toml.contains("[markup]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "docweave")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "docweave")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| DocweaveError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| DocweaveError::Config(format!("Parse error: {}", e)));
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            DocweaveError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as an inline TOML string and parse it
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| DocweaveError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use docweave_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r##"
    ///     [syntax]
    ///     Marker = "#"
    /// "##).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.syntax.marker, '#');
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.syntax.merge(&other.syntax);
        self.markup.merge(&other.markup);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| DocweaveError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
