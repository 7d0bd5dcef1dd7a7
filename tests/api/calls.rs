use halopsa_cli::api::{ApiResponse, Failure, HaloError, Method};
use serde_json::{Map, Value, json};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{ManualClock, TENANT, client_for, mount_token};

fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[tokio::test]
async fn test_get_sends_tenant_bearer_and_params() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 3600, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/Tickets"))
        .and(header("authorization", "Bearer tok-1"))
        .and(query_param("tenant", TENANT))
        .and(query_param("count", "5"))
        .and(query_param("open_only", "true"))
        .and(query_param_is_missing("client_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tickets": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    let query = params(&[("count", json!(5)), ("open_only", json!(true)), ("client_id", Value::Null)]);

    let response = client
        .call_api("/api/Tickets", Method::GET, None, Some(&query))
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::Json(json!({"tickets": [{"id": 1}]})));
    server.verify().await;
}

#[tokio::test]
async fn test_token_shared_across_calls() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 3600, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/Status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    for _ in 0..3 {
        client.call_api("/api/Status", Method::GET, None, None).await.unwrap();
    }

    server.verify().await;
}

#[tokio::test]
async fn test_post_serializes_object_body_as_json() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 3600, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/Tickets"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!([{"summary": "Printer on fire"}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    let body = json!([{"summary": "Printer on fire"}]);

    let response = client
        .call_api("/api/Tickets", Method::POST, Some(&body), None)
        .await
        .unwrap();

    assert_eq!(response.as_json(), Some(&json!({"id": 42})));
    server.verify().await;
}

#[tokio::test]
async fn test_string_body_is_sent_verbatim() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 3600, 1).await;
    Mock::given(method("PUT"))
        .and(path("/api/Notes"))
        .and(body_string("already-serialized"))
        .respond_with(ResponseTemplate::new(200).set_body_string("stored"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    let body = json!("already-serialized");

    let response = client
        .call_api("/api/Notes", Method::PUT, Some(&body), None)
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::Text("stored".to_string()));
    server.verify().await;
}

#[tokio::test]
async fn test_path_with_existing_query_keeps_it() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 3600, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/Client"))
        .and(query_param("search", "acme"))
        .and(query_param("tenant", TENANT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    client
        .call_api("/api/Client?search=acme", Method::GET, None, None)
        .await
        .unwrap();

    server.verify().await;
}

#[tokio::test]
async fn test_error_status_is_api_call_error() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 3600, 1).await;
    Mock::given(method("DELETE"))
        .and(path("/api/Tickets/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Ticket not found"))
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    let err = client
        .call_api("/api/Tickets/7", Method::DELETE, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, HaloError::ApiCall(Failure::Status { status: 404, .. })));
    assert_eq!(err.body(), Some("Ticket not found"));
}

#[tokio::test]
async fn test_failed_authentication_stops_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Tickets"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, ManualClock::new());
    let err = client
        .call_api("/api/Tickets", Method::GET, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, HaloError::Authentication(_)));
    server.verify().await;
}
