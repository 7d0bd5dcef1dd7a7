//! Raw API command handler

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::RawCommands;
use crate::cli::output::{OutputFormat, print_response};
use halopsa_cli::HaloClient;

pub async fn handle_raw_command(args: RawCommands, client: &HaloClient, format: OutputFormat) -> Result<()> {
    let body = args.data.as_deref().map(parse_body);
    let params = parse_params(&args.params)?;
    let method = args.method.into();

    let response = client
        .call_api(&args.endpoint, method, body.as_ref(), Some(&params))
        .await
        .with_context(|| format!("Failed to execute {:?} request", args.method))?;

    print_response(&response, format)
}

/// JSON if it parses, otherwise the raw text
fn parse_body(data: &str) -> Value {
    serde_json::from_str(data).unwrap_or_else(|_| Value::String(data.to_string()))
}

fn parse_params(params: &[String]) -> Result<Map<String, Value>> {
    params
        .iter()
        .map(|param| {
            let (key, value) = param
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("Invalid --param '{}', expected KEY=VALUE", param))?;
            Ok((key.to_string(), Value::String(value.to_string())))
        })
        .collect()
}
