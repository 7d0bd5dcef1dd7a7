//! Read-only navigation over the bundled HaloPSA API description document
//!
//! The document is an OpenAPI-shaped JSON file. Every navigation call loads
//! it fresh from its [`DocumentSource`]; nothing is cached between calls and
//! the document is never mutated. Key order of `paths` and
//! `components.schemas` is preserved as it appears in the file, which is
//! what "document order" means throughout this module.

pub mod category;
pub mod endpoints;
pub mod models;
pub mod overview;
pub mod schemas;
pub mod source;

pub use category::categorize_path;
pub use endpoints::{DetailOptions, endpoint_details, list_endpoints, search_endpoints};
pub use models::{
    ComponentsPreview, EndpointDetail, EndpointDetails, EndpointList, EndpointRecord, EndpointSearch,
    MatchedEndpoint, OperationDetail, PathSummary, SchemaListing, SchemaOverview, SearchHit,
};
pub use overview::schema_overview;
pub use schemas::list_schemas;
pub use source::{ApiDocument, DocumentSource, FileDocument, InlineDocument};

use serde_json::{Map, Value};

/// Contiguous page `[skip, skip + limit)` of `items`, clamped to its bounds
pub(crate) fn window<T>(items: &[T], skip: usize, limit: usize) -> &[T] {
    let start = skip.min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}

/// Case-insensitive substring test
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Operations of a path item, in document order. Non-mapping path items
/// have none.
pub(crate) fn operations(path_item: &Value) -> impl Iterator<Item = (&String, &Value)> {
    path_item.as_object().into_iter().flat_map(Map::iter)
}

/// Upper-cased method names and the first non-empty summary across them
pub(crate) fn describe_path(path_item: &Value) -> (Vec<String>, String) {
    let mut methods = Vec::new();
    let mut summary = String::new();

    for (method, operation) in operations(path_item) {
        methods.push(method.to_uppercase());
        if summary.is_empty() {
            if let Some(s) = str_field(operation, "summary") {
                summary = s.to_string();
            }
        }
    }

    (methods, summary)
}

pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// String entries of an operation's `tags` array
pub(crate) fn tags(operation: &Value) -> Option<Vec<String>> {
    operation.get("tags").and_then(Value::as_array).map(|tags| {
        tags.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}
