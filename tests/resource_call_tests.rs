//! Integration tests for resource calls against a mock API.
//!
//! These tests verify that catalog actions turn into the expected HTTP
//! requests, and that HTTP failures reach the caller unchanged.

use constant_contact::rest::{ActionCatalog, ActionSpec, ResourceError};
use constant_contact::{
    AccessToken, ApiKey, BaseUrl, ConstantContact, ConstantContactConfig, HttpError, HttpMethod,
    InvalidHttpRequestError,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the mock server.
fn config_for(server: &MockServer) -> ConstantContactConfig {
    ConstantContactConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> ConstantContact {
    ConstantContact::new(config_for(server)).unwrap()
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_get_sends_credentials_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("status", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"pagination": {}},
            "results": [{"id": "1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = assert_ok!(
        client
            .call("contacts", "list", json!({"status": "ACTIVE"}))
            .await
    );

    assert_eq!(response.code, 200);
    assert_eq!(response.body["results"][0]["id"], "1");
    assert_eq!(response.next_link(), None);
}

#[tokio::test]
async fn test_path_params_are_consumed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/lists/7/contacts"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let lists = client.resource("lists.contacts").unwrap();

    assert_ok!(lists.call("list", json!({"id": 7, "limit": 50})).await);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("id=7"), "path param leaked into query: {query}");
}

#[tokio::test]
async fn test_post_sends_remaining_params_as_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/emailmarketing/campaigns/1100/schedules"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"scheduled_date": "2026-11-01T10:00:00Z"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = assert_ok!(
        client
            .call(
                "campaigns.schedules",
                "create",
                json!({"campaign_id": "1100", "scheduled_date": "2026-11-01T10:00:00Z"}),
            )
            .await
    );

    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_empty_delete_response_parses_as_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/contacts/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = assert_ok!(client.call("contacts", "delete", json!({"id": 12})).await);

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_custom_catalog_without_version_uses_default_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/things"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = ActionCatalog::from_entries([(
        "things",
        vec![ActionSpec::new("list", HttpMethod::Get, "/things")],
    )])
    .unwrap();
    let client = ConstantContact::with_catalog(config_for(&server), &catalog).unwrap();

    assert_ok!(client.call("things", "list", json!({})).await);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_http_error_passes_through_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([
            {"error_key": "http.status.not_found", "error_message": "Not found"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.call("contacts", "get", json!({"id": 404})).await);

    match error {
        ResourceError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body[0]["error_key"], "http.status.not_found");
        }
        other => panic!("expected HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_path_param_sends_nothing() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = assert_err!(client.call("contacts", "get", json!({})).await);

    assert!(matches!(
        error,
        ResourceError::Http(HttpError::InvalidRequest(
            InvalidHttpRequestError::MissingPathParam { .. }
        ))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_action_sends_nothing() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = assert_err!(client.call("library.info", "delete", json!({})).await);

    assert!(matches!(error, ResourceError::UnknownAction { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Credential rotation
// ============================================================================

#[tokio::test]
async fn test_rotated_token_used_by_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account/info"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "old"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/account/info"))
        .and(header("Authorization", "Bearer rotated-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let account = client.resource("account.info").unwrap().clone();

    let before = assert_ok!(account.call("get", json!({})).await);
    client.set_access_token(AccessToken::new("rotated-token").unwrap());
    let after = assert_ok!(account.call("get", json!({})).await);

    assert_eq!(before.body["token"], "old");
    assert_eq!(after.body["token"], "new");
}
