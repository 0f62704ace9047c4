//! Theme and locale preference commands

use std::path::PathBuf;

use colored::Colorize;

use crate::error::Result;
use crate::prefs::{self, Locale, ThemeMode};

/// Run the theme command: set when a mode is given, print otherwise.
pub fn theme(mode: Option<ThemeMode>, config_path: Option<&str>) -> Result<()> {
    match mode {
        Some(mode) => {
            prefs::set_theme(mode, config_path.map(PathBuf::from))?;
            println!("{} Theme set to {}", "✓".green(), mode.to_string().bold());
        }
        None => {
            println!("{}", prefs::theme());
        }
    }
    Ok(())
}

/// Run the locale command: set when a locale is given, print otherwise.
pub fn locale(locale: Option<Locale>, config_path: Option<&str>) -> Result<()> {
    match locale {
        Some(locale) => {
            prefs::set_locale(locale, config_path.map(PathBuf::from))?;
            println!("{} Locale set to {}", "✓".green(), locale.to_string().bold());
        }
        None => {
            println!("{}", prefs::locale());
        }
    }
    Ok(())
}
