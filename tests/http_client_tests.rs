//! Integration tests for the HTTP transport.
//!
//! These tests verify endpoint resolution, header emission, response body
//! handling, and the status-code-to-error mapping against a mock server.

use besepa_api::{Api, ApiKey, BesepaConfig, RequestError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn test_api(server: &MockServer) -> Api {
    let config = BesepaConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .host(server.uri())
        .build()
        .unwrap();
    Api::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_sends_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/customers/1"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api.get("api/1/customers/1", None).await.unwrap();
    assert_eq!(body, json!({"id": "1"}));
}

#[tokio::test]
async fn test_per_call_headers_override_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/customers"))
        .and(header("Accept", "application/vnd.besepa+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = test_api(&server);
    let mut headers = std::collections::HashMap::new();
    headers.insert(
        "Accept".to_string(),
        "application/vnd.besepa+json".to_string(),
    );

    api.get("api/1/customers", Some(&headers)).await.unwrap();
}

#[tokio::test]
async fn test_success_unwraps_response_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/customers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"id": "1", "name": "Ender Wiggin"}
        })))
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api.get("api/1/customers/1", None).await.unwrap();
    assert_eq!(body, json!({"id": "1", "name": "Ender Wiggin"}));
}

#[tokio::test]
async fn test_success_without_envelope_returns_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/customers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api.get("api/1/customers/1", None).await.unwrap();
    assert_eq!(body, json!({"id": "1"}));
}

#[tokio::test]
async fn test_success_with_empty_body_returns_empty_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/1/customers/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api.delete("api/1/customers/1", None).await.unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1/customers"))
        .and(body_json(json!({"customer": {"name": "Ender Wiggin"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api
        .post(
            "api/1/customers",
            &json!({"customer": {"name": "Ender Wiggin"}}),
            None,
        )
        .await
        .unwrap();
    assert_eq!(body, json!({"id": "1"}));
}

#[tokio::test]
async fn test_bad_request_converts_to_error_value() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1/customers"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "taxid is invalid"})),
        )
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api
        .post("api/1/customers", &json!({"customer": {}}), None)
        .await
        .unwrap();
    assert_eq!(body, json!({"error": {"message": "taxid is invalid"}}));
}

#[tokio::test]
async fn test_bad_request_with_plain_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/customers"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;

    let api = test_api(&server);
    let body = api.get("api/1/customers", None).await.unwrap();
    assert_eq!(body, json!({"error": "bad request"}));
}

#[tokio::test]
async fn test_error_statuses_map_to_typed_errors() {
    let cases: [(u16, &str); 9] = [
        (401, "UnauthorizedAccess"),
        (403, "ForbiddenAccess"),
        (404, "ResourceNotFound"),
        (405, "MethodNotAllowed"),
        (409, "ResourceConflict"),
        (410, "ResourceGone"),
        (422, "ResourceInvalid"),
        (450, "ClientError"),
        (503, "ServerError"),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1/customers"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let api = test_api(&server);
        let error = api.get("api/1/customers", None).await.unwrap_err();
        let matched = match (&error, expected) {
            (RequestError::UnauthorizedAccess { .. }, "UnauthorizedAccess")
            | (RequestError::ForbiddenAccess { .. }, "ForbiddenAccess")
            | (RequestError::ResourceNotFound { .. }, "ResourceNotFound")
            | (RequestError::MethodNotAllowed { .. }, "MethodNotAllowed")
            | (RequestError::ResourceConflict { .. }, "ResourceConflict")
            | (RequestError::ResourceGone { .. }, "ResourceGone")
            | (RequestError::ResourceInvalid { .. }, "ResourceInvalid")
            | (RequestError::ClientError { .. }, "ClientError")
            | (RequestError::ServerError { .. }, "ServerError") => true,
            _ => false,
        };
        assert!(matched, "status {status} mapped to {error:?}, expected {expected}");
    }
}

#[tokio::test]
async fn test_redirect_is_not_followed_and_maps_to_redirection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/customers"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "https://example.com/next"),
        )
        .mount(&server)
        .await;

    let api = test_api(&server);
    let error = api.get("api/1/customers", None).await.unwrap_err();
    assert!(matches!(
        error,
        RequestError::Redirection { location: Some(location), .. }
            if location == "https://example.com/next"
    ));
}

#[tokio::test]
async fn test_connection_failure_maps_to_network_error() {
    // Nothing listens on port 1.
    let config = BesepaConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .host("http://127.0.0.1:1")
        .build()
        .unwrap();
    let api = Api::new(&config).unwrap();

    let error = api.get("api/1/customers", None).await.unwrap_err();
    assert!(matches!(error, RequestError::Network(_)));
}
