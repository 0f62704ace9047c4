//! Account command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{ListArgs, OutputFormat};
use crate::client::models::{Account, CreateAccountRequest, Gender, UpdateAccountRequest};
use crate::client::{AccountApi, MhflClient};
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_optional;
use crate::output::{json, table};

/// Account row for table display
#[derive(Tabled)]
struct AccountDisplay {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "USERNAME")]
    username: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "TELEPHONE")]
    telephone: String,
    #[tabled(rename = "ROLE")]
    role: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

impl From<Account> for AccountDisplay {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            telephone: account.telephone,
            role: account.role,
            created: account.create_time,
        }
    }
}

/// Run the account info command
pub async fn info(format: OutputFormat) -> Result<()> {
    let client = MhflClient::new()?;
    let account = client.account_info().await?;

    match format {
        OutputFormat::Table => {
            println!("{}", "Current Account".bold());
            println!();
            println!("  ID:        {}", account.id);
            println!("  Username:  {}", account.username);
            println!("  Gender:    {}", account.gender);
            println!("  Email:     {}", account.email);
            println!("  Telephone: {}", account.telephone);
            println!("  Role:      {}", account.role);
            println!("  Birthday:  {}", format_optional(account.birthday.as_deref()));
            println!("  Avatar:    {}", format_optional(account.avatar.as_deref()));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&account)?);
        }
    }

    Ok(())
}

/// Run the account update command
pub async fn update(
    username: Option<String>,
    gender: Option<Gender>,
    telephone: Option<String>,
    birthday: Option<String>,
) -> Result<()> {
    let request = UpdateAccountRequest {
        username,
        gender,
        telephone,
        birthday,
    };

    if request.is_empty() {
        println!("Nothing to update. Pass at least one of --username, --gender, --telephone, --birthday.");
        return Ok(());
    }

    let client = MhflClient::new()?;
    client.update_account(request).await?;

    println!("{} Account updated", "✓".green());
    Ok(())
}

/// Run the avatar upload command
pub async fn avatar(path: std::path::PathBuf) -> Result<()> {
    let bytes = std::fs::read(&path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar.png".to_string());

    let client = MhflClient::new()?;
    let url = client.upload_avatar(&filename, bytes).await?;

    println!("{} Avatar uploaded: {}", "✓".green(), url);
    Ok(())
}

/// Run the admin account list command
pub async fn list(format: OutputFormat, filters: &ListArgs, config: &Config) -> Result<()> {
    let client = MhflClient::new()?;
    let query = filters.to_query(config.preferences.page_size);
    let page = client.list_accounts(&query).await?;

    match format {
        OutputFormat::Table => {
            let summary = table::page_summary(page.total, page.current, page.pages);
            let rows: Vec<AccountDisplay> =
                page.records.into_iter().map(AccountDisplay::from).collect();
            println!("{}", table::format_table(&rows));
            println!("{}", summary.dimmed());
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&page)?);
        }
    }

    Ok(())
}

/// Run the admin account create command
pub async fn create(username: String, email: String, telephone: String) -> Result<()> {
    let client = MhflClient::new()?;
    client
        .create_account(CreateAccountRequest {
            username: username.clone(),
            email,
            telephone,
        })
        .await?;

    println!(
        "{} Created account {} with the default password",
        "✓".green(),
        username.bold()
    );
    Ok(())
}

/// Run the admin account delete command
pub async fn delete(id: u64) -> Result<()> {
    let client = MhflClient::new()?;
    client.delete_account(id).await?;

    println!("{} Deleted account {}", "✓".green(), id);
    Ok(())
}
