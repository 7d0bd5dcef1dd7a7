//! Navigation of the API description document through the client.
//! No network is involved; the document comes from memory or a temp file.

mod navigation;

use std::sync::Arc;

use halopsa_cli::HaloClient;
use halopsa_cli::api::InlineDocument;
use serde_json::{Map, Value, json};

use crate::support::test_config;

/// Client whose description document is `doc`; credentials are never used
pub fn client_with_document(doc: &Value) -> HaloClient {
    HaloClient::new(&test_config("http://127.0.0.1:9"))
        .unwrap()
        .with_document_source(Arc::new(InlineDocument::from_value(doc)))
}

/// Document with the given paths (each with a single GET) and schema names
pub fn document(paths: &[&str], schemas: &[&str]) -> Value {
    let paths: Map<String, Value> = paths
        .iter()
        .map(|p| (p.to_string(), json!({"get": {"summary": format!("Get {p}"), "tags": ["Halo"]}})))
        .collect();
    let schemas: Map<String, Value> = schemas
        .iter()
        .map(|s| (s.to_string(), json!({"type": "object", "title": s})))
        .collect();

    json!({
        "info": {"title": "HaloPSA API", "version": "1.0"},
        "servers": [{"url": "https://halo.example.com"}],
        "paths": paths,
        "components": {"schemas": schemas}
    })
}
