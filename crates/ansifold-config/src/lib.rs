//! Ansifold Config
//!
//! This crate handles configuration loading and management
//! for ansifold, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/ansifold/config.toml`
//! - macOS: `~/Library/Application Support/ansifold/config.toml`
//! - Windows: `%APPDATA%\ansifold\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use ansifold_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod width;
mod wrap;

pub use width::WidthConfig;
pub use wrap::WrapConfig;

use ansifold_core::{AnsiError, Result, SliceOptions, WrapOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[wrap]
Columns  = 80
Trim     = true
WordWrap = true
Hard     = false

[width]
AmbiguousAsWide = false
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Wrapping defaults
    #[serde(default)]
    pub wrap: WrapConfig,

    /// Width measurement
    #[serde(default)]
    pub width: WidthConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use ansifold_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[wrap]"));
    /// assert!(toml.contains("[width]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ansifold")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| AnsiError::Config("Could not determine config directory".into()))?;

        Self::ensure_config_file_in(&config_dir)
    }

    /// Ensures `config_dir/config.toml` exists, writing the defaults if not.
    /// An existing file is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            log::info!("writing default config to {}", config_path.display());
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
                log::debug!("loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| AnsiError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// The base config comes from the default location. If
    /// `override_config` names an existing file it is read and merged;
    /// otherwise it is parsed as inline TOML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ansifold_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[wrap]\nHard = true")).unwrap();
    /// assert!(config.wrap.hard);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        Self::load()?.with_override(override_config)
    }

    /// Apply an optional override file or inline TOML string on top of
    /// this config.
    ///
    /// # Example
    ///
    /// ```
    /// use ansifold_config::Config;
    ///
    /// let config = Config::default().with_override(Some("[wrap]\nColumns = 20")).unwrap();
    /// assert_eq!(config.wrap.columns, 20);
    /// ```
    pub fn with_override(mut self, override_config: Option<&str>) -> Result<Self> {
        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| AnsiError::Config(format!("Override parse error: {}", e)))?;

            self.merge(&override_config);
        }

        Ok(self)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use ansifold_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [wrap]
    ///     Columns = 40
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.wrap.columns, 40);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.wrap.merge(&other.wrap);
        self.width.merge(&other.width);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| AnsiError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Wrap options built from the `[wrap]` and `[width]` sections.
    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions::new()
            .trim(self.wrap.trim)
            .word_wrap(self.wrap.word_wrap)
            .hard(self.wrap.hard)
            .ambiguous_as_wide(self.width.ambiguous_as_wide)
    }

    /// Slice options built from the `[width]` section.
    pub fn slice_options(&self) -> SliceOptions {
        SliceOptions {
            ambiguous_as_wide: self.width.ambiguous_as_wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_matches_default() {
        let parsed: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_config: Config = toml::from_str(
            r#"
            [wrap]
            Hard = true
            [width]
            AmbiguousAsWide = true
        "#,
        )
        .unwrap();

        base.merge(&override_config);
        assert!(base.wrap.hard);
        assert!(base.width.ambiguous_as_wide);
        assert_eq!(base.wrap.columns, 80);
    }

    #[test]
    fn test_options() {
        let config: Config = toml::from_str(
            r#"
            [wrap]
            Trim = false
            WordWrap = false
            [width]
            AmbiguousAsWide = true
        "#,
        )
        .unwrap();

        let wrap = config.wrap_options();
        assert!(!wrap.trim);
        assert!(!wrap.word_wrap);
        assert!(!wrap.hard);
        assert!(wrap.ambiguous_as_wide);
        assert!(config.slice_options().ambiguous_as_wide);
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("ansifold"));
        }
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let dir = std::env::temp_dir().join(format!("ansifold-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[wrap\nColumns = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AnsiError::Config(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_with_override() {
        let config = Config::default().with_override(None).unwrap();
        assert_eq!(config, Config::default());

        let config = Config::default()
            .with_override(Some("[width]\nAmbiguousAsWide = true"))
            .unwrap();
        assert!(config.width.ambiguous_as_wide);

        let err = Config::default().with_override(Some("[wrap")).unwrap_err();
        assert!(matches!(err, AnsiError::Config(_)));
    }

    #[test]
    fn test_ensure_config_file_in() {
        let dir = std::env::temp_dir().join(format!("ansifold-ensure-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let path = Config::ensure_config_file_in(&dir).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_TOML);

        std::fs::write(&path, "[wrap]\nColumns = 7\n").unwrap();
        let again = Config::ensure_config_file_in(&dir).unwrap();
        assert_eq!(again, path);
        assert_eq!(Config::load_from(&path).unwrap().wrap.columns, 7);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = std::env::temp_dir().join(format!("ansifold-save-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.wrap.columns = 33;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
