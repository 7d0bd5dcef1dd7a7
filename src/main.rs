use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::commands::{handle_docs_command, handle_query_command, handle_raw_command, handle_test_connection};
use cli::{Cli, Commands};
use halopsa_cli::{HaloClient, HaloConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(path) = &cli.log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        logger.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    logger.init();

    let config = HaloConfig::load(cli.config.as_deref())?;
    info!("Starting halopsa-cli");
    info!("Using URL: {}", config.base_url());
    info!("Tenant: {}", config.tenant);

    let client = HaloClient::new(&config)?;

    match cli.command {
        Commands::TestConnection => handle_test_connection(&client).await,
        Commands::Query(args) => handle_query_command(args, &client, cli.format).await,
        Commands::Raw(args) => handle_raw_command(args, &client, cli.format).await,
        Commands::Docs(command) => handle_docs_command(command, &client, cli.format).await,
    }
}
