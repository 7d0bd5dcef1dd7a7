use super::commands::docs::DocsCommands;
use super::commands::query::QueryCommands;
use super::commands::raw::RawCommands;
use super::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "halopsa-cli")]
#[command(about = "A CLI tool for the HaloPSA REST API and its endpoint catalogue")]
#[command(version)]
pub struct Cli {
    /// TOML config file (defaults to the user config dir, then HALOPSA_* env vars)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate and run a trivial report query
    TestConnection,
    /// Execute a SQL report query
    Query(QueryCommands),
    /// Execute a raw authenticated request against the API
    Raw(RawCommands),
    /// Browse the bundled API description document
    #[command(subcommand)]
    Docs(DocsCommands),
}
