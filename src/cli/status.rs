//! Status command implementation

use colored::Colorize;

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::error::Result;

/// Run the status command
pub fn run(config_path: Option<&str>) -> Result<()> {
    let path = match config_path {
        Some(path) => std::path::PathBuf::from(path),
        None => Config::default_path()?,
    };
    let config = Config::load_from(path.clone())?;

    println!("{}", "mhflop Configuration".bold());
    println!();
    println!("  Config file: {}", path.display());
    println!("  Theme:       {}", config.preferences.theme);
    println!("  Locale:      {}", config.preferences.locale);
    println!("  Page size:   {}", config.preferences.page_size);
    println!();

    // An expired record is evicted by this read, with its usual notice
    let store = CredentialStore::open()?;
    match store.read_record() {
        Some(record) => {
            println!(
                "  Signed in as: {} (id {})",
                record.username.bold().green(),
                record.id
            );
            println!("  Token expires: {}", record.expire);
        }
        None => {
            println!("  {}", "Not signed in. Run `mhflop login` first.".yellow());
        }
    }

    Ok(())
}
