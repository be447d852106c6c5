use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::paths::get_config_path;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No tasks yet, add one above";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Capture mouse events for hover and click handling.
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// How long status bar messages stay visible.
    #[serde(default = "default_status_timeout_secs")]
    pub status_timeout_secs: u64,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_mouse() -> bool {
    true
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

fn default_status_timeout_secs() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mouse: default_mouse(),
            empty_message: default_empty_message(),
            status_timeout_secs: default_status_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Reads the config at `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert!(config.mouse);
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
        assert_eq!(config.status_timeout_secs, 3);
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let toml_str = r#"
        theme = "dark"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert!(config.mouse);
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
    }

    #[test]
    fn test_config_deserialization_all_fields() {
        let toml_str = r#"
        theme = "light"
        mouse = false
        empty_message = "Nothing to do"
        status_timeout_secs = 5
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "light");
        assert!(!config.mouse);
        assert_eq!(config.empty_message, "Nothing to do");
        assert_eq!(config.status_timeout_secs, 5);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_save_then_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            theme: "dark".to_string(),
            mouse: false,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "dark");
        assert!(!loaded.mouse);
    }

    #[test]
    fn test_load_from_invalid_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
