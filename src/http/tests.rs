//! Tests for the HTTP transport module

use super::*;
use crate::auth::Credential;
use crate::error::Error;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("saml-roster/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .header("Content-Type", "application/json")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("Content-Type"),
        Some(&"application/json".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_post_json_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({"query": "{ viewer { login } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"viewer": {"login": "octocat"}}
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let body: Value = client
        .post_json(
            &format!("{}/graphql", mock_server.uri()),
            &json!({"query": "{ viewer { login } }"}),
        )
        .await
        .unwrap();

    assert_eq!(body["data"]["viewer"]["login"], "octocat");
}

#[tokio::test]
async fn test_post_json_applies_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "token ghp_testtoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().with_credential(Credential::token("ghp_testtoken"));
    assert!(client.has_credential());

    let body: Value = client
        .post_json(&format!("{}/graphql", mock_server.uri()), &json!({}))
        .await
        .unwrap();
    assert_eq!(body, json!({"data": {}}));
}

#[tokio::test]
async fn test_post_json_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("Accept", "application/json")
        .build();
    let client = HttpClient::with_config(config);

    let result: crate::error::Result<Value> = client
        .post_json(&format!("{}/graphql", mock_server.uri()), &json!({}))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_post_json_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let result: crate::error::Result<Value> = client
        .post_json(&format!("{}/graphql", mock_server.uri()), &json!({}))
        .await;

    match result.unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Bad credentials");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_post_json_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    // A single attempt must be made, never more
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let result: crate::error::Result<Value> = client
        .post_json(&format!("{}/graphql", mock_server.uri()), &json!({}))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        Error::HttpStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_post_json_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let result: crate::error::Result<Value> = client
        .post_json(&format!("{}/graphql", mock_server.uri()), &json!({}))
        .await;

    assert!(matches!(result.unwrap_err(), Error::JsonParse(_)));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().with_credential(Credential::token("ghp_secret"));
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(!debug_str.contains("ghp_secret"));
}
