pub mod handler;

use clap::{Args, ValueEnum};
use halopsa_cli::api::Method;

pub use handler::handle_raw_command;

#[derive(Args)]
pub struct RawCommands {
    /// API path relative to the instance URL (e.g. "/api/Tickets")
    #[arg(help = "API endpoint path")]
    pub endpoint: String,

    /// HTTP method
    #[arg(long, default_value = "get", help = "HTTP method")]
    pub method: HttpMethod,

    /// Request body (JSON, or a plain string sent verbatim)
    #[arg(long, help = "Request body data")]
    pub data: Option<String>,

    /// Extra query parameters, repeatable
    #[arg(long = "param", value_name = "KEY=VALUE", help = "Query parameter")]
    pub params: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}
