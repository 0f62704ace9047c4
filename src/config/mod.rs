//! Configuration management for mhflop

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::prefs::{Locale, ThemeMode};

/// Application configuration
///
/// Credentials are NOT kept here: the credential store owns its own files so
/// the session scope can live outside the config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
///
/// Theme and locale are persisted under their own keys and read
/// independently at process start by `prefs::init()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Theme mode (system, light, dark)
    #[serde(default)]
    pub theme: ThemeMode,

    /// Display locale
    #[serde(default)]
    pub locale: Locale,

    /// Default page size for admin list requests
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            locale: Locale::default(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mhflop").join("config.yaml"))
    }

    /// Load configuration from the default path, or defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file is not an error: first runs start from defaults.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.preferences.theme, ThemeMode::System);
        assert_eq!(config.preferences.locale, Locale::ZhCn);
        assert_eq!(config.preferences.page_size, 10);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.preferences.page_size, 10);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.preferences.theme = ThemeMode::Dark;
        config.preferences.locale = Locale::EnUs;
        config.preferences.page_size = 50;
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.preferences.theme, ThemeMode::Dark);
        assert_eq!(loaded.preferences.locale, Locale::EnUs);
        assert_eq!(loaded.preferences.page_size, 50);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  theme: light\n").unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.preferences.theme, ThemeMode::Light);
        assert_eq!(loaded.preferences.locale, Locale::ZhCn);
        assert_eq!(loaded.preferences.page_size, 10);
    }
}
