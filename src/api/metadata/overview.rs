use std::collections::BTreeMap;

use super::category::categorize_path;
use super::models::{PathSummary, SchemaOverview};
use super::source::ApiDocument;
use super::describe_path;
use crate::api::constants::limits;

/// Summarize the whole document: metadata, path count, category groups and
/// the first path summaries
pub fn schema_overview(doc: &ApiDocument) -> SchemaOverview {
    let mut path_groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut all_paths = Vec::new();

    for (path, item) in doc.paths() {
        let (methods, summary) = describe_path(item);
        all_paths.push(PathSummary {
            path: path.clone(),
            methods,
            summary,
        });

        path_groups
            .entry(categorize_path(path).to_string())
            .or_default()
            .push(path.clone());
    }

    let total_paths = all_paths.len();
    all_paths.truncate(limits::OVERVIEW_PATH_LIMIT);

    log::debug!(
        "API overview: {} paths in {} categories",
        total_paths,
        path_groups.len()
    );

    SchemaOverview {
        info: doc.info().cloned(),
        servers: doc.servers().cloned(),
        total_paths,
        path_groups,
        all_paths,
        message: "Use the endpoint details operation with a specific path pattern to get full endpoint information"
            .to_string(),
    }
}
