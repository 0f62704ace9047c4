//! Dataset catalog command implementations

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{ListArgs, OutputFormat};
use crate::client::models::Dataset;
use crate::client::{CatalogApi, MhflClient};
use crate::config::Config;
use crate::error::Result;
use crate::output::{json, table};

/// Dataset row for table display
#[derive(Tabled)]
struct DatasetDisplay {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CREATED")]
    created: String,
    #[tabled(rename = "UPDATED")]
    updated: String,
}

impl From<Dataset> for DatasetDisplay {
    fn from(dataset: Dataset) -> Self {
        Self {
            id: dataset.id,
            name: dataset.data_name,
            created: dataset.create_time,
            updated: dataset.update_time,
        }
    }
}

/// Run the dataset list command
pub async fn list(format: OutputFormat, filters: &ListArgs, config: &Config) -> Result<()> {
    let client = MhflClient::new()?;
    let query = filters.to_query(config.preferences.page_size);
    let page = client.list_datasets(&query).await?;

    match format {
        OutputFormat::Table => {
            let summary = table::page_summary(page.total, page.current, page.pages);
            let rows: Vec<DatasetDisplay> =
                page.records.into_iter().map(DatasetDisplay::from).collect();
            println!("{}", table::format_table(&rows));
            println!("{}", summary.dimmed());
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&page)?);
        }
    }

    Ok(())
}

/// Run the dataset create command
pub async fn create(name: String) -> Result<()> {
    let client = MhflClient::new()?;
    client.create_dataset(&name).await?;

    println!("{} Registered dataset {}", "✓".green(), name.bold());
    Ok(())
}

/// Run the dataset rename command
pub async fn update(id: u64, name: String) -> Result<()> {
    let client = MhflClient::new()?;
    client.update_dataset(id, &name).await?;

    println!("{} Renamed dataset {} to {}", "✓".green(), id, name.bold());
    Ok(())
}

/// Run the dataset delete command
pub async fn delete(id: u64) -> Result<()> {
    let client = MhflClient::new()?;
    client.delete_dataset(id).await?;

    println!("{} Deleted dataset {}", "✓".green(), id);
    Ok(())
}
