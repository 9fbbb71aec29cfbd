//! Client construction and request primitive integration tests.

use orbit_members::{
    Client, ErrorKind, Query, auth::CredentialResolver, config::HttpConfig,
};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{header, header_exists, method, path, query_param},
};

use crate::common::{API_KEY, TestFixture, WORKSPACE_ID};

/// Explicit credentials are used verbatim.
#[tokio::test]
async fn test_client_with_explicit_credentials() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    assert_eq!(fixture.client.credentials().workspace_id(), WORKSPACE_ID);
    assert_eq!(fixture.client.credentials().api_key(), API_KEY);
    assert!(fixture.client.base_url().ends_with("/api/v1/"));
}

/// Missing credentials are a configuration error, whatever the environment.
#[test]
fn test_missing_credentials_is_configuration_error() {
    let err = CredentialResolver::new()
        .workspace_id("ws")
        .resolve_with(|_| None)
        .expect_err("API key should be required");

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.message(), "You must provide an Orbit Workspace ID and Orbit API Key");
}

/// Plain HTTP is refused unless the client is marked insecure.
#[test]
fn test_http_base_url_requires_insecure() {
    let err = Client::builder()
        .workspace_id("ws")
        .api_key("key")
        .http_config(HttpConfig::builder().base_url("http://localhost:1/api/v1").build())
        .build()
        .expect_err("HTTP should be rejected");

    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// The request primitive sends auth headers and a query string.
#[tokio::test]
async fn test_request_sends_headers_and_query() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    Mock::given(method("GET"))
        .and(path(fixture.path("/activities")))
        .and(query_param("items", "10"))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let body = fixture
        .client
        .request("get", "/activities", &Query::new().with("items", 10), None)
        .await
        .expect("Request should succeed");

    assert_eq!(body, json!({"data": []}));
}

/// Empty method or path fails before anything is sent.
#[tokio::test]
async fn test_request_requires_method_and_path() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    let err = fixture
        .client
        .request("", "/members", &Query::new(), None)
        .await
        .expect_err("Empty method should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "You must pass a client, method, and endpoint");

    let err = fixture
        .client
        .request("GET", "", &Query::new(), None)
        .await
        .expect_err("Empty path should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let received = fixture.server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "No request should reach the server");
}

/// Non-success statuses surface as request errors carrying the status.
#[tokio::test]
async fn test_request_error_status() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    Mock::given(method("POST"))
        .and(path(fixture.path("/members")))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "identity is invalid"})),
        )
        .mount(&fixture.server)
        .await;

    let err = fixture
        .client
        .request("POST", "/members", &Query::new(), Some(&json!({})))
        .await
        .expect_err("422 should fail");

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.message(), "Request failed with status code 422: identity is invalid");
}

/// Connection failures surface as request errors.
#[tokio::test]
async fn test_request_network_failure() {
    let client = Client::builder()
        .workspace_id("ws")
        .api_key("key")
        .base_url("http://127.0.0.1:9/api/v1")
        .insecure()
        .build()
        .expect("Client should build");

    let err = client
        .request("GET", "/members", &Query::new(), None)
        .await
        .expect_err("Connection should be refused");

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status(), None);
}
