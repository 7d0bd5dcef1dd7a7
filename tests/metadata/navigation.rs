use std::io::Write;
use std::sync::Arc;

use halopsa_cli::api::{DetailOptions, FileDocument, HaloError};
use serde_json::json;

use super::{client_with_document, document};
use crate::support::test_config;

fn ticket_paths(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("/Tickets/Type{i}")).collect()
}

#[tokio::test]
async fn test_detail_cap_above_match_count() {
    let mut paths = ticket_paths(10);
    paths.push("/Client".to_string());
    let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
    let client = client_with_document(&document(&refs, &[]));

    let options = DetailOptions {
        max_endpoints: 1000,
        ..DetailOptions::default()
    };
    let details = client.get_api_endpoint_details("ticket", &options).await.unwrap();

    assert_eq!(details.match_count, 10);
    assert_eq!(details.matching_paths.len(), 10);
    assert_eq!(details.total_matches, 10);
    assert!(!details.limited);
}

#[tokio::test]
async fn test_detail_cap_below_match_count() {
    let paths = ticket_paths(10);
    let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
    let client = client_with_document(&document(&refs, &[]));

    let options = DetailOptions {
        max_endpoints: 5,
        ..DetailOptions::default()
    };
    let details = client.get_api_endpoint_details("ticket", &options).await.unwrap();

    assert_eq!(details.match_count, 5);
    assert_eq!(details.total_matches, 10);
    assert!(details.limited);
    assert_eq!(details.matching_paths[4].path, "/Tickets/Type4");
}

#[tokio::test]
async fn test_detail_hard_ceiling_of_fifty() {
    let paths = ticket_paths(60);
    let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
    let client = client_with_document(&document(&refs, &[]));

    let options = DetailOptions {
        max_endpoints: 1000,
        ..DetailOptions::default()
    };
    let details = client.get_api_endpoint_details("tickets", &options).await.unwrap();

    assert_eq!(details.match_count, 50);
    assert_eq!(details.total_matches, 60);
    assert!(details.limited);
}

#[tokio::test]
async fn test_detail_attaches_first_twenty_schemas() {
    let names: Vec<String> = (0..25).map(|i| format!("Schema{i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let client = client_with_document(&document(&["/Tickets"], &refs));

    let details = client
        .get_api_endpoint_details("/tickets", &DetailOptions::default())
        .await
        .unwrap();

    let schemas = details.components.unwrap().schemas.unwrap();
    assert_eq!(schemas.len(), 20);
    assert_eq!(schemas.keys().next().map(String::as_str), Some("Schema00"));
    assert_eq!(schemas.keys().last().map(String::as_str), Some("Schema19"));
}

#[tokio::test]
async fn test_detail_serializes_camel_case() {
    let client = client_with_document(&json!({
        "paths": {"/Tickets": {"get": {"summary": "List", "operationId": "getTickets", "requestBody": {"x": 1}}}}
    }));

    let details = client
        .get_api_endpoint_details("tickets", &DetailOptions::default())
        .await
        .unwrap();
    let value = serde_json::to_value(&details).unwrap();

    assert_eq!(value["pathPattern"], "tickets");
    assert_eq!(value["matchCount"], 1);
    assert_eq!(value["matchingPaths"][0]["path"], "/Tickets");
    assert_eq!(value["matchingPaths"][0]["operations"][0]["operationId"], "getTickets");
    assert_eq!(value["matchingPaths"][0]["operations"][0]["requestBody"], json!({"x": 1}));
}

#[tokio::test]
async fn test_list_category_priority() {
    let client = client_with_document(&document(&["/Ticket/Asset", "/Asset"], &[]));

    let tickets = client.list_api_endpoints(Some("Tickets"), 100, 0).await.unwrap();
    assert_eq!(tickets.total_endpoints, 1);
    assert_eq!(tickets.endpoints[0].path, "/Ticket/Asset");
    assert_eq!(tickets.endpoints[0].category, "Tickets");

    let assets = client.list_api_endpoints(Some("assets"), 100, 0).await.unwrap();
    assert_eq!(assets.total_endpoints, 1);
    assert_eq!(assets.endpoints[0].path, "/Asset");
}

#[tokio::test]
async fn test_overview_through_client() {
    let client = client_with_document(&document(&["/Tickets", "/Agent", "/KBArticle"], &[]));

    let overview = client.get_api_schema_overview().await.unwrap();

    assert_eq!(overview.total_paths, 3);
    assert_eq!(overview.path_groups["Knowledge Base"], vec!["/KBArticle"]);
    assert_eq!(overview.servers, Some(json!([{"url": "https://halo.example.com"}])));
}

#[tokio::test]
async fn test_schema_window_semantics() {
    let names: Vec<String> = (0..10).map(|i| format!("Invoice{i}")).collect();
    let mut refs: Vec<&str> = names.iter().map(String::as_str).collect();
    refs.push("Ticket");
    let client = client_with_document(&document(&[], &refs));

    let listing = client.get_api_schemas(Some("INVOICE"), 3, 5, false).await.unwrap();

    assert_eq!(listing.returned_count, 3);
    assert_eq!(listing.matching_count, 10);
    assert_eq!(listing.total_schemas_in_api, 11);
    assert_eq!(
        listing.schemas.keys().collect::<Vec<_>>(),
        vec!["Invoice5", "Invoice6", "Invoice7"]
    );

    let value = serde_json::to_value(&listing).unwrap();
    assert_eq!(value["totalSchemasInAPI"], 11);
}

#[tokio::test]
async fn test_missing_document_is_schema_fetch_error() {
    let client = halopsa_cli::HaloClient::new(
        &test_config("http://127.0.0.1:9").with_api_doc_path("/nonexistent/swagger.json"),
    )
    .unwrap();

    let err = client.get_api_schema_overview().await.unwrap_err();
    assert!(matches!(err, HaloError::SchemaFetch(_)));

    let err = client.search_api_endpoints("ticket", 10, 0).await.unwrap_err();
    assert!(matches!(err, HaloError::SchemaFetch(_)));
}

#[tokio::test]
async fn test_file_document_is_reloaded_on_every_call() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", document(&["/Tickets"], &[])).unwrap();
    file.flush().unwrap();

    let client = halopsa_cli::HaloClient::new(&test_config("http://127.0.0.1:9"))
        .unwrap()
        .with_document_source(Arc::new(FileDocument::new(file.path())));

    assert_eq!(client.get_api_schema_overview().await.unwrap().total_paths, 1);

    std::fs::write(file.path(), document(&["/Tickets", "/Client"], &[]).to_string()).unwrap();

    assert_eq!(client.get_api_schema_overview().await.unwrap().total_paths, 2);
}

#[tokio::test]
async fn test_malformed_file_is_schema_fetch_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"paths\": ").unwrap();
    file.flush().unwrap();

    let client = halopsa_cli::HaloClient::new(&test_config("http://127.0.0.1:9"))
        .unwrap()
        .with_document_source(Arc::new(FileDocument::new(file.path())));

    let err = client.list_api_endpoints(None, 10, 0).await.unwrap_err();
    assert!(matches!(err, HaloError::SchemaFetch(_)));
}
