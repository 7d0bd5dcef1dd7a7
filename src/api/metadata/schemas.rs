use serde_json::Map;

use super::contains_ignore_case;
use super::models::SchemaListing;
use super::source::ApiDocument;
use crate::api::constants::limits;

/// Page through `components.schemas` in document order, optionally keeping
/// only names containing `pattern` (case-insensitive).
///
/// The first `skip` matches are passed over without counting against
/// `limit`; the next `limit` matches are returned with their full bodies.
pub fn list_schemas(
    doc: &ApiDocument,
    pattern: Option<&str>,
    limit: usize,
    skip: usize,
    list_names: bool,
) -> SchemaListing {
    let mut schemas = Map::new();
    let mut matching_names = Vec::new();
    let mut skipped = 0;

    let all = doc.schemas();
    for (name, schema) in all.into_iter().flat_map(Map::iter) {
        if let Some(pattern) = pattern {
            if !contains_ignore_case(name, pattern) {
                continue;
            }
        }
        matching_names.push(name.clone());

        if skipped < skip {
            skipped += 1;
            continue;
        }
        if schemas.len() < limit {
            schemas.insert(name.clone(), schema.clone());
        }
    }

    let total_schemas_in_api = all.map_or(0, Map::len);
    let returned_count = schemas.len();
    let matching_count = matching_names.len();

    let message = match pattern {
        Some(pattern) => format!(
            "Showing {} of {} schemas matching \"{}\" (skipped {})",
            returned_count, matching_count, pattern, skip
        ),
        None => format!(
            "Showing {} schemas starting from position {}. Total: {}.",
            returned_count, skip, total_schemas_in_api
        ),
    };

    let (schema_names, hint) = if list_names || matching_count <= limits::SCHEMA_NAME_LIST_THRESHOLD {
        matching_names.sort();
        (Some(matching_names), None)
    } else {
        (
            None,
            Some(format!(
                "{} schemas match. Set listNames=true to see all names.",
                matching_count
            )),
        )
    };

    SchemaListing {
        schemas,
        returned_count,
        matching_count,
        total_schemas_in_api,
        skipped: skip,
        limited: returned_count >= limit,
        has_more: skip.saturating_add(returned_count) < matching_count,
        message,
        schema_names,
        hint,
    }
}
