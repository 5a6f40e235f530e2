//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/dirsum/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [filtering]
//! min_size = "10MB"
//!
//! [display]
//! absolute = false
//! color = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Filtering options
    #[serde(default)]
    pub filtering: FileFilterConfig,

    /// Display options
    #[serde(default)]
    pub display: FileDisplayConfig,
}

/// Filtering options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileFilterConfig {
    /// Minimum size threshold for displayed directories (e.g., `"10MB"`)
    pub min_size: Option<String>,
}

/// Display options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileDisplayConfig {
    /// Whether to print absolute paths instead of directory names
    pub absolute: Option<bool>,

    /// Whether to colorize output
    pub color: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/dirsum/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux/macOS, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dirsum").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.filtering.min_size.is_none());
        assert!(config.display.absolute.is_none());
        assert!(config.display.color.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[filtering]
min_size = "50MB"

[display]
absolute = true
color = false
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.filtering.min_size, Some("50MB".to_string()));
        assert_eq!(config.display.absolute, Some(true));
        assert_eq!(config.display.color, Some(false));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[filtering]
min_size = "100MB"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.filtering.min_size, Some("100MB".to_string()));
        assert!(config.display.absolute.is_none());
        assert!(config.display.color.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.filtering.min_size.is_none());
        assert!(config.display.absolute.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[display]
absolute = "not_a_bool"
"#;
        let result = toml::from_str::<FileConfig>(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with(Path::new("dirsum").join("config.toml")));
        }
    }

    #[test]
    fn test_load_returns_defaults_when_no_file() {
        let config = FileConfig::load().unwrap();
        let _ = config.filtering.min_size;
    }
}
