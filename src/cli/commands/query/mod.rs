pub mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_query_command;

#[derive(Args)]
pub struct QueryCommands {
    /// SQL query to execute against the report endpoint
    #[arg(help = "SQL query string")]
    pub sql: Option<String>,

    /// Read the SQL from a file instead of the command line
    #[arg(short, long, help = "Path to file containing the SQL query")]
    pub file: Option<PathBuf>,

    /// Save query results to file
    #[arg(short, long, help = "Save results to file")]
    pub output: Option<PathBuf>,
}
