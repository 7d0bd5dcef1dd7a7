use anyhow::Result;
use colored::*;

use halopsa_cli::HaloClient;

/// Probe the instance; the process fails when the probe does
pub async fn handle_test_connection(client: &HaloClient) -> Result<()> {
    eprintln!("{}", "Testing connection...".dimmed());

    if client.test_connection().await {
        eprintln!("{} Connection successful", "✓".bright_green());
        Ok(())
    } else {
        eprintln!("{} Connection failed (see log for details)", "✗".bright_red());
        anyhow::bail!("Connection test failed")
    }
}
