pub mod handler;

use clap::Subcommand;

use halopsa_cli::api::constants::limits;

pub use handler::handle_docs_command;

#[derive(Subcommand)]
pub enum DocsCommands {
    /// Document metadata, path count and endpoints grouped by category
    Overview,
    /// Full metadata for endpoints whose path contains a pattern
    Details {
        /// Case-insensitive path substring
        pattern: String,
        /// Only list methods and the first summary of each path
        #[arg(long)]
        summary_only: bool,
        /// Leave out parameters, request bodies, responses and component schemas
        #[arg(long)]
        no_schemas: bool,
        /// Maximum endpoints to return (never more than 50)
        #[arg(long, default_value_t = limits::DEFAULT_MAX_ENDPOINTS)]
        max: usize,
        /// Include request/response examples when the document has them
        #[arg(long)]
        examples: bool,
    },
    /// List endpoints sorted by path, optionally within one category
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = limits::DEFAULT_LIST_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
    /// Search paths, summaries, descriptions and tags
    Search {
        query: String,
        #[arg(long, default_value_t = limits::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
    /// Component schemas, optionally filtered by name
    Schemas {
        /// Case-insensitive schema name substring
        pattern: Option<String>,
        #[arg(long, default_value_t = limits::DEFAULT_SCHEMA_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        /// Always list every matching schema name
        #[arg(long)]
        list_names: bool,
    },
}
