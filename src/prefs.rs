//! Process-wide display preferences
//!
//! Theme mode and locale are read from the config file once at process start
//! via [`init`] and consulted from anywhere through [`theme`]/[`locale`].
//! Writers go through [`set_theme`]/[`set_locale`], which persist the change
//! before updating the in-memory state. Contract: a single writer at a time —
//! CLI handlers run sequentially, so the `RwLock` only guards readers against
//! a torn update, not competing writers.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// Theme mode preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the terminal/system preference
    #[default]
    System,
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

/// Display locale preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Locale {
    /// Simplified Chinese
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// US English
    #[serde(rename = "en-US")]
    EnUs,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::System => write!(f, "system"),
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::ZhCn => write!(f, "zh-CN"),
            Locale::EnUs => write!(f, "en-US"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct State {
    theme: ThemeMode,
    locale: Locale,
}

static STATE: RwLock<State> = RwLock::new(State {
    theme: ThemeMode::System,
    locale: Locale::ZhCn,
});

/// Load persisted preferences into the process-wide state.
///
/// Called once at startup; safe to call again (tests do).
pub fn init(config: &Config) {
    let mut state = STATE.write().expect("prefs lock poisoned");
    state.theme = config.preferences.theme;
    state.locale = config.preferences.locale;
}

/// Current theme mode
pub fn theme() -> ThemeMode {
    STATE.read().expect("prefs lock poisoned").theme
}

/// Current locale
pub fn locale() -> Locale {
    STATE.read().expect("prefs lock poisoned").locale
}

/// Persist a new theme mode, then update the in-memory state.
pub fn set_theme(mode: ThemeMode, config_path: Option<PathBuf>) -> Result<()> {
    let path = match config_path {
        Some(p) => p,
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(path.clone())?;
    config.preferences.theme = mode;
    config.save_to(path)?;

    STATE.write().expect("prefs lock poisoned").theme = mode;
    Ok(())
}

/// Persist a new locale, then update the in-memory state.
pub fn set_locale(locale: Locale, config_path: Option<PathBuf>) -> Result<()> {
    let path = match config_path {
        Some(p) => p,
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(path.clone())?;
    config.preferences.locale = locale;
    config.save_to(path)?;

    STATE.write().expect("prefs lock poisoned").locale = locale;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The state is process-wide; serialize tests that touch it.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_theme_writes_through() {
        let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        set_theme(ThemeMode::Dark, Some(path.clone())).unwrap();

        assert_eq!(theme(), ThemeMode::Dark);
        let saved = Config::load_from(path).unwrap();
        assert_eq!(saved.preferences.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_set_locale_writes_through() {
        let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        set_locale(Locale::EnUs, Some(path.clone())).unwrap();

        assert_eq!(locale(), Locale::EnUs);
        let saved = Config::load_from(path).unwrap();
        assert_eq!(saved.preferences.locale, Locale::EnUs);
    }

    #[test]
    fn test_init_reads_both_keys() {
        let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut config = Config::default();
        config.preferences.theme = ThemeMode::Light;
        config.preferences.locale = Locale::EnUs;

        init(&config);

        assert_eq!(theme(), ThemeMode::Light);
        assert_eq!(locale(), Locale::EnUs);
    }

    #[test]
    fn test_locale_serde_uses_bcp47_tags() {
        let yaml = serde_yaml::to_string(&Locale::EnUs).unwrap();
        assert_eq!(yaml.trim(), "en-US");
        let parsed: Locale = serde_yaml::from_str("zh-CN").unwrap();
        assert_eq!(parsed, Locale::ZhCn);
    }
}
