//! Result records of the description-document navigation operations
//!
//! All records serialize to camelCase JSON for the calling agent.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Methods and first summary of one path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSummary {
    pub path: String,
    pub methods: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,
    pub total_paths: usize,
    /// Category label to the paths in it, each list in document order
    pub path_groups: BTreeMap<String, Vec<String>>,
    /// The first paths of the document
    pub all_paths: Vec<PathSummary>,
    pub message: String,
}

/// Per-method metadata of a matched endpoint.
///
/// `parameters`, `request_body` and `responses` are present only when
/// schemas were requested; `examples` only when examples were requested and
/// the document has them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDetail {
    pub method: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub operation_id: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EndpointDetail {
    /// Emitted when only summaries were requested
    Summary { methods: Vec<String>, summary: String },
    /// One entry per method, in document order
    Full { operations: Vec<OperationDetail> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedEndpoint {
    pub path: String,
    #[serde(flatten)]
    pub detail: EndpointDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentsPreview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDetails {
    pub path_pattern: String,
    pub matching_paths: Vec<MatchedEndpoint>,
    /// Matches emitted, at most the effective cap
    pub match_count: usize,
    /// Matches in the whole document, ignoring the cap
    pub total_matches: usize,
    /// True iff `match_count` reached the effective cap
    pub limited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentsPreview>,
}

/// Derived endpoint record used by the listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointRecord {
    pub path: String,
    pub methods: Vec<String>,
    pub summary: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointList {
    pub total_endpoints: usize,
    pub endpoints: Vec<EndpointRecord>,
    pub returned_count: usize,
    pub skipped: usize,
    pub limited: bool,
    pub has_more: bool,
    /// Distinct categories across the whole document, sorted
    pub categories: Vec<String>,
    pub message: String,
}

/// One matching (path, method) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub method: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSearch {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub returned_count: usize,
    pub total_results: usize,
    pub skipped: usize,
    pub has_more: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaListing {
    /// Emitted schemas by name, in document order
    pub schemas: Map<String, Value>,
    pub returned_count: usize,
    pub matching_count: usize,
    #[serde(rename = "totalSchemasInAPI")]
    pub total_schemas_in_api: usize,
    pub skipped: usize,
    pub limited: bool,
    pub has_more: bool,
    pub message: String,
    /// Sorted names of every matching schema, when listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_names: Option<Vec<String>>,
    /// Set instead of `schema_names` when too many match to list unasked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
