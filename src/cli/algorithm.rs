//! Algorithm catalog command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{ListArgs, OutputFormat};
use crate::client::models::Algorithm;
use crate::client::{CatalogApi, MhflClient};
use crate::config::Config;
use crate::error::Result;
use crate::output::{json, table};

/// Algorithm row for table display
#[derive(Tabled)]
struct AlgorithmDisplay {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CREATED")]
    created: String,
    #[tabled(rename = "UPDATED")]
    updated: String,
}

impl From<Algorithm> for AlgorithmDisplay {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            id: algorithm.id,
            name: algorithm.algorithm_name,
            created: algorithm.create_time,
            updated: algorithm.update_time,
        }
    }
}

/// Run the algorithm list command
pub async fn list(format: OutputFormat, filters: &ListArgs, config: &Config) -> Result<()> {
    let client = MhflClient::new()?;
    let query = filters.to_query(config.preferences.page_size);
    let page = client.list_algorithms(&query).await?;

    match format {
        OutputFormat::Table => {
            let summary = table::page_summary(page.total, page.current, page.pages);
            let rows: Vec<AlgorithmDisplay> = page
                .records
                .into_iter()
                .map(AlgorithmDisplay::from)
                .collect();
            println!("{}", table::format_table(&rows));
            println!("{}", summary.dimmed());
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&page)?);
        }
    }

    Ok(())
}

/// Run the algorithm create command
pub async fn create(name: String) -> Result<()> {
    let client = MhflClient::new()?;
    client.create_algorithm(&name).await?;

    println!("{} Registered algorithm {}", "✓".green(), name.bold());
    Ok(())
}

/// Run the algorithm rename command
pub async fn update(id: u64, name: String) -> Result<()> {
    let client = MhflClient::new()?;
    client.update_algorithm(id, &name).await?;

    println!("{} Renamed algorithm {} to {}", "✓".green(), id, name.bold());
    Ok(())
}

/// Run the algorithm delete command
pub async fn delete(id: u64) -> Result<()> {
    let client = MhflClient::new()?;
    client.delete_algorithm(id).await?;

    println!("{} Deleted algorithm {}", "✓".green(), id);
    Ok(())
}
