use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use halopsa_cli::api::ApiResponse;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact JSON (no whitespace, for piping)
    JsonCompact,
}

/// Render any serializable result in the requested format
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).context("Failed to format JSON output"),
        OutputFormat::JsonCompact => serde_json::to_string(data).context("Failed to format JSON output"),
    }
}

pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<()> {
    println!("{}", format_output(data, format)?);
    Ok(())
}

/// Text responses are printed verbatim, JSON ones formatted
pub fn print_response(response: &ApiResponse, format: OutputFormat) -> Result<()> {
    match response {
        ApiResponse::Text(text) => println!("{}", text),
        ApiResponse::Json(value) => print_output(value, format)?,
    }
    Ok(())
}
