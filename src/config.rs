// Configuration: an optional TOML file in the platform config directory.
//
// - Linux/Unix: `$XDG_CONFIG_HOME/users-app/config.toml`
// - macOS: `~/Library/Application Support/users-app/config.toml`
// - Windows: `%APPDATA%\users-app\config.toml`
//
// ```toml
// [display]
// color = true
// banner = true
// ```
//
// The app must always start, so `Config::load` never fails: problems are
// logged and the defaults are used instead.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    ConfigDirNotFound,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decorate message tags with ANSI colors.
    pub color: bool,
    /// Print the welcome banner on start.
    pub banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            banner: true,
        }
    }
}

impl Config {
    /// Load the platform config file, falling back to defaults when it is
    /// missing or broken.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    /// Same as `load` but for an explicit path.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), ?config, "Loaded config");
                config
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Ignoring config file");
                Self::default()
            }
        }
    }

    fn config_file_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        path.push("users-app");
        path.push("config.toml");
        Ok(path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push("users_app_tests");
        dir.push(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.display.color);
        assert!(config.display.banner);
    }

    #[test]
    fn test_partial_display_section() {
        let config = Config::parse("[display]\ncolor = false\n").unwrap();
        assert!(!config.display.color);
        assert!(config.display.banner);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let result = Config::parse("[display]\ncolor = \"loud\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_falls_back_to_defaults() {
        let dir = test_dir("load_from_fallback");

        let missing = dir.join("missing.toml");
        assert_eq!(Config::load_from(&missing), Config::default());

        let malformed = dir.join("malformed.toml");
        fs::write(&malformed, "[display\ncolor = ").unwrap();
        assert_eq!(Config::load_from(&malformed), Config::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_valid_file() {
        let dir = test_dir("load_from_valid");
        let path = dir.join("config.toml");
        fs::write(&path, "[display]\ncolor = false\nbanner = false\n").unwrap();

        let config = Config::load_from(&path);
        assert!(!config.display.color);
        assert!(!config.display.banner);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut path = std::env::temp_dir();
        path.push("users_app_tests");
        path.push("does_not_exist.toml");
        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
