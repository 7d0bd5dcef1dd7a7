use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::constants::DEFAULT_TIMEOUT_SECS;

pub const ENV_URL: &str = "HALOPSA_URL";
pub const ENV_CLIENT_ID: &str = "HALOPSA_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "HALOPSA_CLIENT_SECRET";
pub const ENV_TENANT: &str = "HALOPSA_TENANT";
pub const ENV_TIMEOUT_SECS: &str = "HALOPSA_TIMEOUT_SECS";
pub const ENV_API_DOC: &str = "HALOPSA_API_DOC";

/// Connection settings for one HaloPSA instance, built once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HaloConfig {
    pub url: String,
    pub client_id: String,
    pub client_secret: String,
    pub tenant: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Location of the bundled API description document (OpenAPI JSON)
    #[serde(default = "default_api_doc_path")]
    pub api_doc_path: PathBuf,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_api_doc_path() -> PathBuf {
    PathBuf::from("swagger.json")
}

impl HaloConfig {
    pub fn new(
        url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            tenant: tenant.into(),
            timeout_secs: default_timeout_secs(),
            api_doc_path: default_api_doc_path(),
        }
    }

    pub fn with_api_doc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.api_doc_path = path.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Instance URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Read settings from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        info!("Loading configuration from environment variables");

        let mut config = Self::new(
            required_var(ENV_URL)?,
            required_var(ENV_CLIENT_ID)?,
            required_var(ENV_CLIENT_SECRET)?,
            required_var(ENV_TENANT)?,
        );

        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
            config.timeout_secs = timeout
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, timeout))?;
        }
        if let Ok(path) = std::env::var(ENV_API_DOC) {
            config.api_doc_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load from an explicit file, else the default config file if it
    /// exists, else the environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Self::from_env(),
        }
    }

    /// `<config dir>/halopsa-cli/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("halopsa-cli").join("config.toml"))
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable not set", name))
}
