//! HomeHub configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HomeHubError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeHubConfig {
    #[serde(default = "default_home_name")]
    pub home_name: String,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub home: HomeConfig,
}

fn default_home_name() -> String { "My Home".into() }

impl Default for HomeHubConfig {
    fn default() -> Self {
        Self {
            home_name: default_home_name(),
            scheduler: SchedulerConfig::default(),
            logging: LoggingConfig::default(),
            home: HomeConfig::default(),
        }
    }
}

impl HomeHubConfig {
    /// Load config from the default path (~/.homehub/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HomeHubError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| HomeHubError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save config to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| HomeHubError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the HomeHub home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".homehub")
    }
}

/// Trigger engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Run the background loop that fires schedules. When false, schedules
    /// are stored but never executed.
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u64,
    /// Firing records kept in memory.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn bool_true() -> bool { true }
fn default_check_interval() -> u64 { 15 }
fn default_history_limit() -> usize { 100 }

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_interval_secs: default_check_interval(),
            history_limit: default_history_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String { "homehub=info".into() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Home setup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Populate the registry with the sample devices on startup.
    #[serde(default = "bool_true")]
    pub seed_demo_devices: bool,
    /// Add the sample schedules on startup.
    #[serde(default = "bool_true")]
    pub seed_demo_schedules: bool,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            seed_demo_devices: true,
            seed_demo_schedules: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HomeHubConfig::default();
        assert_eq!(config.home_name, "My Home");
        assert!(config.scheduler.enabled);
        assert_eq!(config.scheduler.check_interval_secs, 15);
        assert_eq!(config.logging.level, "homehub=info");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            home_name = "Beach House"

            [scheduler]
            enabled = false
            check_interval_secs = 30

            [logging]
            json = true
        "#;

        let config: HomeHubConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.home_name, "Beach House");
        assert!(!config.scheduler.enabled);
        assert_eq!(config.scheduler.check_interval_secs, 30);
        assert_eq!(config.scheduler.history_limit, 100);
        assert!(config.logging.json);
        assert!(config.home.seed_demo_devices);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: HomeHubConfig = toml::from_str("").unwrap();
        assert_eq!(config.home_name, "My Home");
        assert!(config.home.seed_demo_schedules);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("homehub-test-config");
        let path = dir.join("config.toml");
        let mut config = HomeHubConfig::default();
        config.scheduler.check_interval_secs = 5;
        config.save_to(&path).unwrap();

        let loaded = HomeHubConfig::load_from(&path).unwrap();
        assert_eq!(loaded.scheduler.check_interval_secs, 5);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("homehub-no-such-dir").join("config.toml");
        let err = HomeHubConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, HomeHubError::Config(_)));
    }

    #[test]
    fn test_home_dir() {
        let home = HomeHubConfig::home_dir();
        assert!(home.to_string_lossy().contains("homehub"));
    }
}
