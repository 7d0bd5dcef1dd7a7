use std::collections::BTreeSet;

use serde_json::Value;

use super::category::categorize_path;
use super::models::{
    ComponentsPreview, EndpointDetail, EndpointDetails, EndpointList, EndpointRecord, EndpointSearch,
    MatchedEndpoint, OperationDetail, SearchHit,
};
use super::source::ApiDocument;
use super::{contains_ignore_case, describe_path, operations, str_field, tags, window};
use crate::api::constants::limits;

/// Flags controlling how much of each matched endpoint is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailOptions {
    pub summary_only: bool,
    pub include_schemas: bool,
    /// Requested cap; never more than 50 are returned regardless
    pub max_endpoints: usize,
    pub include_examples: bool,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            summary_only: false,
            include_schemas: true,
            max_endpoints: limits::DEFAULT_MAX_ENDPOINTS,
            include_examples: false,
        }
    }
}

impl DetailOptions {
    pub fn effective_cap(&self) -> usize {
        self.max_endpoints.min(limits::MAX_ENDPOINT_DETAILS)
    }
}

/// Full metadata for paths containing `path_pattern`, in document order
pub fn endpoint_details(doc: &ApiDocument, path_pattern: &str, options: &DetailOptions) -> EndpointDetails {
    let cap = options.effective_cap();
    let mut matching_paths = Vec::new();

    for (path, item) in doc.paths() {
        if matching_paths.len() >= cap {
            break;
        }
        if !contains_ignore_case(path, path_pattern) {
            continue;
        }

        let detail = if options.summary_only {
            let (methods, summary) = describe_path(item);
            EndpointDetail::Summary { methods, summary }
        } else {
            EndpointDetail::Full {
                operations: operations(item)
                    .map(|(method, op)| operation_detail(method, op, options))
                    .collect(),
            }
        };

        matching_paths.push(MatchedEndpoint {
            path: path.clone(),
            detail,
        });
    }

    let match_count = matching_paths.len();
    let total_matches = doc
        .paths()
        .filter(|(path, _)| contains_ignore_case(path, path_pattern))
        .count();

    let components = if options.include_schemas && !options.summary_only && match_count > 0 {
        Some(ComponentsPreview {
            schemas: doc.schemas().map(|schemas| {
                schemas
                    .iter()
                    .take(limits::DETAIL_SCHEMA_LIMIT)
                    .map(|(name, schema)| (name.clone(), schema.clone()))
                    .collect()
            }),
        })
    } else {
        None
    };

    log::debug!(
        "Endpoint details for '{}': {} of {} matches (cap {})",
        path_pattern,
        match_count,
        total_matches,
        cap
    );

    EndpointDetails {
        path_pattern: path_pattern.to_string(),
        matching_paths,
        match_count,
        total_matches,
        limited: match_count >= cap,
        components,
    }
}

fn operation_detail(method: &str, op: &Value, options: &DetailOptions) -> OperationDetail {
    let schema_field = |key: &str| {
        if options.include_schemas {
            op.get(key).cloned()
        } else {
            None
        }
    };

    OperationDetail {
        method: method.to_uppercase(),
        summary: str_field(op, "summary").map(str::to_string),
        description: str_field(op, "description").map(str::to_string),
        operation_id: str_field(op, "operationId").map(str::to_string),
        tags: tags(op),
        parameters: schema_field("parameters"),
        request_body: schema_field("requestBody"),
        responses: schema_field("responses"),
        examples: if options.include_examples {
            op.get("examples").cloned()
        } else {
            None
        },
    }
}

/// Page through every endpoint sorted by path, optionally restricted to one
/// category (case-insensitive)
pub fn list_endpoints(doc: &ApiDocument, category: Option<&str>, limit: usize, skip: usize) -> EndpointList {
    let all: Vec<EndpointRecord> = doc
        .paths()
        .filter(|(_, item)| item.is_object())
        .map(|(path, item)| {
            let (methods, summary) = describe_path(item);
            EndpointRecord {
                path: path.clone(),
                methods,
                summary,
                category: categorize_path(path).to_string(),
            }
        })
        .collect();

    let categories: Vec<String> = all
        .iter()
        .map(|e| e.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut matching: Vec<EndpointRecord> = match category {
        Some(wanted) => all
            .into_iter()
            .filter(|e| e.category.to_lowercase() == wanted.to_lowercase())
            .collect(),
        None => all,
    };
    matching.sort_by(|a, b| a.path.cmp(&b.path));

    let total_endpoints = matching.len();
    let endpoints = window(&matching, skip, limit).to_vec();
    let returned_count = endpoints.len();

    let message = match category {
        Some(category) => format!(
            "Showing {} of {} endpoints in category \"{}\"",
            returned_count, total_endpoints, category
        ),
        None => format!(
            "Showing {} endpoints starting from position {}. Total: {}.",
            returned_count, skip, total_endpoints
        ),
    };

    EndpointList {
        total_endpoints,
        endpoints,
        returned_count,
        skipped: skip,
        limited: returned_count >= limit,
        has_more: skip.saturating_add(returned_count) < total_endpoints,
        categories,
        message,
    }
}

/// Search every (path, method) pair for `query` in its path, summary,
/// description or tags
pub fn search_endpoints(doc: &ApiDocument, query: &str, limit: usize, skip: usize) -> EndpointSearch {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for (path, item) in doc.paths() {
        for (method, op) in operations(item) {
            let summary = str_field(op, "summary");
            let description = str_field(op, "description");
            let op_tags = tags(op);

            let mut searchable = vec![path.as_str(), summary.unwrap_or(""), description.unwrap_or("")];
            if let Some(op_tags) = &op_tags {
                searchable.extend(op_tags.iter().map(String::as_str));
            }

            if searchable.join(" ").to_lowercase().contains(&needle) {
                matches.push(SearchHit {
                    path: path.clone(),
                    method: method.to_uppercase(),
                    summary: summary.map(str::to_string),
                    description: description.map(str::to_string),
                    tags: op_tags,
                });
            }
        }
    }

    let total_results = matches.len();
    let results = window(&matches, skip, limit).to_vec();
    let returned_count = results.len();

    EndpointSearch {
        query: query.to_string(),
        message: format!(
            "Found {} endpoints matching \"{}\". Showing {} starting from position {}.",
            total_results, query, returned_count, skip
        ),
        results,
        returned_count,
        total_results,
        skipped: skip,
        has_more: skip.saturating_add(returned_count) < total_results,
    }
}
