//! Configuration management for skyledger.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "skyledger";

/// Default reservation data file name.
const DATA_FILE_NAME: &str = "reservations.txt";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SKYLEDGER_`)
/// 2. TOML config file at `~/.config/skyledger/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Cabin configuration.
    pub cabin: CabinConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the reservation data file.
    /// Defaults to `~/.local/share/skyledger/reservations.txt`
    pub data_path: Option<PathBuf>,
    /// Maximum number of live reservations.
    pub max_reservations: usize,
}

/// Cabin-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinConfig {
    /// Highest valid seat number; seats run from 1 to this value.
    pub max_seats: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: None, // Will be resolved to default at runtime
            max_reservations: 100,
        }
    }
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self { max_seats: 150 }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `SKYLEDGER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SKYLEDGER_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.max_reservations == 0 {
            return Err(Error::ConfigValidation {
                message: "max_reservations must be greater than 0".to_string(),
            });
        }

        if self.cabin.max_seats == 0 {
            return Err(Error::ConfigValidation {
                message: "max_seats must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the data file path, resolving defaults if not set.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.storage
            .data_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATA_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.data_path.is_none());
        assert_eq!(config.storage.max_reservations, 100);
        assert_eq!(config.cabin.max_seats, 150);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_capacity() {
        let mut config = Config::default();
        config.storage.max_reservations = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("max_reservations"));
    }

    #[test]
    fn test_validate_zero_seats() {
        let mut config = Config::default();
        config.cabin.max_seats = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("max_seats"));
    }

    #[test]
    fn test_data_path_default() {
        let config = Config::default();
        let path = config.data_path();

        assert!(path.to_string_lossy().contains("reservations.txt"));
    }

    #[test]
    fn test_data_path_custom() {
        let mut config = Config::default();
        config.storage.data_path = Some(PathBuf::from("/custom/path/data.txt"));

        assert_eq!(config.data_path(), PathBuf::from("/custom/path/data.txt"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("skyledger"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("skyledger"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_storage_config_serialize() {
        let storage = StorageConfig::default();
        let json = serde_json::to_string(&storage).unwrap();
        assert!(json.contains("max_reservations"));
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"max_reservations": 50}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.max_reservations, 50);
    }

    #[test]
    fn test_cabin_config_deserialize() {
        let json = r#"{"max_seats": 180}"#;
        let cabin: CabinConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cabin.max_seats, 180);
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
