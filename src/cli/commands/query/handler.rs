//! Report query command handler

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::time::Instant;

use super::QueryCommands;
use crate::cli::output::{OutputFormat, format_output};
use halopsa_cli::HaloClient;

pub async fn handle_query_command(args: QueryCommands, client: &HaloClient, format: OutputFormat) -> Result<()> {
    let sql = match (args.sql, args.file) {
        (Some(_), Some(_)) => anyhow::bail!("Cannot specify both a query string and --file"),
        (None, None) => anyhow::bail!("Either provide a query string or use --file to specify a query file"),
        (Some(sql), None) => sql,
        (None, Some(file_path)) => {
            let content = fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read query file: {}", file_path.display()))?;

            let trimmed = content.trim();
            if trimmed.is_empty() {
                anyhow::bail!("Query file is empty: {}", file_path.display());
            }

            eprintln!("Reading query from: {}", file_path.display().to_string().cyan());
            trimmed.to_string()
        }
    };

    eprintln!("{}", "Executing query...".dimmed());
    let start = Instant::now();

    let result = client.execute_query(&sql).await.context("Failed to execute query")?;

    log::info!("Query executed in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    let formatted = format_output(&result, format)?;
    if let Some(output_path) = args.output {
        fs::write(&output_path, &formatted)
            .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;
        eprintln!("Results saved to: {}", output_path.display().to_string().bright_green());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
