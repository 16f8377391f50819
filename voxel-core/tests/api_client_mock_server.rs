//! End-to-end tests for `ApiClient` against a local mock server.

use serde_json::json;
use std::sync::Arc;
use voxel_core::prelude::*;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer, session: impl SessionProvider + 'static) -> ApiClient {
    let config = ApiConfig::builder().base_url(server.uri()).build();
    ApiClient::new(config, session).expect("Failed to create API client")
}

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer abc123"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, StaticToken::new("abc123"));
    let body = client.get("projects").await.expect("GET failed");

    assert_eq!(body, json!({"projects": []}));
}

#[tokio::test]
async fn test_anonymous_request_has_no_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NoSession);
    client.get("health").await.unwrap();

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(
        requests
            .iter()
            .all(|r: &Request| !r.headers.contains_key("authorization"))
    );
}

#[tokio::test]
async fn test_session_store_token_is_read_per_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(SessionStore::new());
    store.init(Some(Session::new("first"))).unwrap();
    let client = client_for(&server, store.clone());

    client.get("projects").await.unwrap();
    store
        .apply(AuthEvent::TokenRefreshed(Session::new("second")))
        .unwrap();
    client.get("projects").await.unwrap();

    store.apply(AuthEvent::SignedOut).unwrap();
    Mock::given(method("GET"))
        .and(path("/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    client.get("public").await.unwrap();

    let requests = server.received_requests().await.unwrap_or_default();
    let last = requests.last().expect("no request recorded");
    assert!(!last.headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header_exists("authorization"))
        .and(body_json(json!({"x": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, StaticToken::new("t"));
    let body = client.post("items", &json!({"x": 1})).await.unwrap();

    assert_eq!(body, json!({"id": 42}));
}

#[tokio::test]
async fn test_put_no_content_yields_null() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/projects/p1"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server, StaticToken::new("t"));
    let body = client
        .put("projects/p1", &json!({"name": "Renamed"}))
        .await
        .unwrap();

    assert!(body.is_null());
}

#[tokio::test]
async fn test_delete_with_body_returns_it() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/items/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .mount(&server)
        .await;

    let client = client_for(&server, NoSession);
    assert_eq!(
        client.delete("items/1").await.unwrap(),
        json!({"deleted": true})
    );
}

#[tokio::test]
async fn test_not_found_detail_is_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server, StaticToken::new("t"));
    let err = client.get("projects/missing").await.unwrap_err();

    assert_eq!(err.to_string(), "not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_without_json_uses_reason_phrase() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, NoSession);
    let err = client.get("projects").await.unwrap_err();

    assert_eq!(err.to_string(), "Internal Server Error");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, NoSession);
    let err = client.get("projects").await.unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_oversized_response_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(2048)))
        .mount(&server)
        .await;

    let config = ApiConfig::builder()
        .base_url(server.uri())
        .max_response_size(1024)
        .build();
    let client = ApiClient::new(config, NoSession).unwrap();

    let err = client.get("big").await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}

#[tokio::test]
async fn test_oversized_error_body_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(2048)))
        .mount(&server)
        .await;

    let config = ApiConfig::builder()
        .base_url(server.uri())
        .max_response_size(1024)
        .build();
    let client = ApiClient::new(config, NoSession).unwrap();

    let err = client.get("big").await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }), "got {err:?}");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::builder()
        .base_url(format!("http://{addr}"))
        .build();
    let client = ApiClient::new(config, NoSession).unwrap();

    let err = client.get("projects").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(err.status().is_none());
}
