//! System resources command implementation

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::client::{MhflClient, SystemApi};
use crate::error::Result;
use crate::output::formatters::{format_gb, format_percent};
use crate::output::json;

/// Run the resources command
pub async fn run(format: OutputFormat) -> Result<()> {
    let client = MhflClient::new()?;
    let resources = client.system_resources().await?;

    match format {
        OutputFormat::Table => {
            println!("{}", "Backend Host Resources".bold());
            println!();
            println!(
                "  CPU:    {} ({} cores, {} logical)",
                format_percent(resources.cpu.usage_percent),
                resources.cpu.cores,
                resources.cpu.cores_logical
            );
            println!(
                "  Memory: {} of {} used ({})",
                format_gb(resources.memory.used),
                format_gb(resources.memory.total),
                format_percent(resources.memory.usage_percent)
            );
            match resources.gpu {
                Some(gpu) => println!(
                    "  GPU:    {} of {} used ({})",
                    format_gb(gpu.used),
                    format_gb(gpu.total),
                    format_percent(gpu.usage_percent)
                ),
                None => println!("  GPU:    N/A"),
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&resources)?);
        }
    }

    Ok(())
}
