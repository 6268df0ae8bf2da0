//! Configuration for TopHit.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::options::OptionDescription;
use crate::TopHitResult;

/// Main configuration for TopHit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Options served by the configured options provider.
    #[serde(default)]
    pub options: Vec<OptionDescription>,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Top-hit cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Report provider computations to the activity recorder.
    #[serde(default = "default_true")]
    pub record_activities: bool,

    /// Computations slower than this (in milliseconds) are logged as warnings.
    #[serde(default = "default_slow_provider_ms")]
    pub slow_provider_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            record_activities: true,
            slow_provider_ms: default_slow_provider_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_slow_provider_ms() -> u64 {
    500
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> TopHitResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TopHitResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            cache: CacheConfig::default(),
            options: default_options(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

fn default_options() -> Vec<OptionDescription> {
    vec![
        OptionDescription::new("show line numbers")
            .with_hit("Show line numbers")
            .with_path("Editor | General | Appearance")
            .with_configurable_id("editor.preferences.appearance"),
        OptionDescription::new("font size")
            .with_hit("Font size")
            .with_path("Editor | Font")
            .with_configurable_id("editor.preferences.fonts.default"),
        OptionDescription::new("soft wraps")
            .with_hit("Use soft wraps in editor")
            .with_path("Editor | General")
            .with_configurable_id("editor.preferences.general"),
        OptionDescription::new("theme")
            .with_hit("Theme")
            .with_path("Appearance & Behavior | Appearance")
            .with_configurable_id("preferences.lookFeel"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default_config();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.log_format, "text");
        assert!(config.cache.record_activities);
        assert_eq!(config.cache.slow_provider_ms, 500);
        assert!(!config.options.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [cache]
            record_activities = false

            [[options]]
            option = "tab size"
            path = "Editor | Code Style"
            "#,
        )
        .unwrap();

        assert!(!config.cache.record_activities);
        assert_eq!(config.cache.slow_provider_ms, 500);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.options.len(), 1);
        assert_eq!(config.options[0].option, "tab size");
        assert!(config.options[0].hit.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tophit.toml");

        let mut config = Config::default_config();
        config.general.log_level = "debug".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.general.log_level, "debug");
        assert_eq!(loaded.options, config.options);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(dir.path().join("nope.toml")).is_err());
    }
}
