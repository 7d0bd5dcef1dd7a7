//! API description browsing handler

use anyhow::{Context, Result};

use super::DocsCommands;
use crate::cli::output::{OutputFormat, print_output};
use halopsa_cli::HaloClient;
use halopsa_cli::api::DetailOptions;

pub async fn handle_docs_command(command: DocsCommands, client: &HaloClient, format: OutputFormat) -> Result<()> {
    match command {
        DocsCommands::Overview => {
            let overview = client
                .get_api_schema_overview()
                .await
                .context("Failed to fetch API schema overview")?;
            print_output(&overview, format)
        }
        DocsCommands::Details {
            pattern,
            summary_only,
            no_schemas,
            max,
            examples,
        } => {
            let options = DetailOptions {
                summary_only,
                include_schemas: !no_schemas,
                max_endpoints: max,
                include_examples: examples,
            };
            let details = client
                .get_api_endpoint_details(&pattern, &options)
                .await
                .context("Failed to fetch API endpoint details")?;
            print_output(&details, format)
        }
        DocsCommands::List { category, limit, skip } => {
            let list = client
                .list_api_endpoints(category.as_deref(), limit, skip)
                .await
                .context("Failed to list API endpoints")?;
            print_output(&list, format)
        }
        DocsCommands::Search { query, limit, skip } => {
            let search = client
                .search_api_endpoints(&query, limit, skip)
                .await
                .context("Failed to search API endpoints")?;
            print_output(&search, format)
        }
        DocsCommands::Schemas {
            pattern,
            limit,
            skip,
            list_names,
        } => {
            let schemas = client
                .get_api_schemas(pattern.as_deref(), limit, skip, list_names)
                .await
                .context("Failed to get API schemas")?;
            print_output(&schemas, format)
        }
    }
}
