use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::error::{HaloError, Result};

/// Parsed API description document
#[derive(Debug, Clone)]
pub struct ApiDocument {
    root: Map<String, Value>,
}

impl ApiDocument {
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| HaloError::SchemaFetch(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(HaloError::SchemaFetch(format!(
                "expected a JSON object at the document root, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn info(&self) -> Option<&Value> {
        self.root.get("info")
    }

    pub fn servers(&self) -> Option<&Value> {
        self.root.get("servers")
    }

    /// `(path, path item)` pairs in document order
    pub fn paths(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root
            .get("paths")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(Map::iter)
    }

    /// `components.schemas`, if the document has any
    pub fn schemas(&self) -> Option<&Map<String, Value>> {
        self.root
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Where the description document comes from. Implementations re-read the
/// document on every call.
#[async_trait]
pub trait DocumentSource: Send + Sync + fmt::Debug {
    async fn load(&self) -> Result<ApiDocument>;
}

/// Document stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileDocument {
    async fn load(&self) -> Result<ApiDocument> {
        log::debug!("Loading API description from {:?}", self.path);
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| HaloError::SchemaFetch(format!("{}: {}", self.path.display(), e)))?;
        ApiDocument::parse(&text)
    }
}

/// Document held in memory as raw JSON text, parsed on every load
#[derive(Debug, Clone)]
pub struct InlineDocument {
    raw: Arc<str>,
}

impl InlineDocument {
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn from_value(value: &Value) -> Self {
        Self::new(value.to_string())
    }
}

#[async_trait]
impl DocumentSource for InlineDocument {
    async fn load(&self) -> Result<ApiDocument> {
        ApiDocument::parse(&self.raw)
    }
}
