//! Integration tests for cursor pagination.
//!
//! Pages are served by a mock API whose responses link to each other
//! through `meta.pagination.next_link`.

use std::sync::{Arc, Mutex};

use constant_contact::rest::{page_results, PaginationError, PaginationOptions, ResourceError};
use constant_contact::{
    AccessToken, ApiKey, BaseUrl, ConstantContact, ConstantContactConfig, HttpError,
};
use serde_json::{json, Value};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ConstantContact {
    let config = ConstantContactConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ConstantContact::new(config).unwrap()
}

fn page_body(ids: &[&str], next_link: Option<&str>) -> Value {
    let pagination = next_link.map_or_else(|| json!({}), |link| json!({"next_link": link}));
    json!({
        "meta": {"pagination": pagination},
        "results": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>()
    })
}

/// Mounts three linked contact pages.
async fn mount_three_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("next", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["3", "4"], Some("/v2/contacts?next=p3"))),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("next", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["5"], None)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["1", "2"], Some("/v2/contacts?next=p2"))),
        )
        .mount(server)
        .await;
}

fn collect_ids(seen: &Arc<Mutex<Vec<String>>>, page: &constant_contact::HttpResponse) {
    let mut seen = seen.lock().unwrap();
    for item in page_results(page) {
        seen.push(item["id"].as_str().unwrap_or_default().to_string());
    }
}

// ============================================================================
// Successful runs
// ============================================================================

#[tokio::test]
async fn test_walks_all_pages_in_order_then_finishes() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = seen.clone();
    let error_hook_called = Arc::new(Mutex::new(false));
    let error_hook_flag = error_hook_called.clone();

    let first = client.call("contacts", "list", json!({"limit": 2}));
    let result = client
        .paginate(
            first,
            move |page| {
                collect_ids(&seen_in_handler, &page);
                async { Ok::<(), String>(()) }
            },
            PaginationOptions::new()
                .on_error(move |_| *error_hook_flag.lock().unwrap() = true)
                .on_finished(|| async { Ok("done") }),
        )
        .await;

    assert_eq!(assert_ok!(result), Some("done"));
    assert_eq!(*seen.lock().unwrap(), ["1", "2", "3", "4", "5"]);
    assert!(!*error_hook_called.lock().unwrap());
}

#[tokio::test]
async fn test_slow_handler_finishes_before_next_page_is_fetched() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let server_ref = &server;
    let fetched_per_page = Arc::new(Mutex::new(Vec::new()));
    let fetched_in_handler = fetched_per_page.clone();
    let finished_calls = Arc::new(Mutex::new(Vec::new()));
    let finished_in_hook = finished_calls.clone();

    let first = client.call("contacts", "list", json!({"limit": 2}));
    let result = client
        .paginate(
            first,
            move |_page| {
                let fetched = fetched_in_handler.clone();
                async move {
                    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                    let requests = server_ref.received_requests().await.unwrap_or_default();
                    fetched.lock().unwrap().push(requests.len());
                    Ok::<(), String>(())
                }
            },
            PaginationOptions::new().on_finished(move || async move {
                let requests = server_ref.received_requests().await.unwrap_or_default();
                finished_in_hook.lock().unwrap().push(requests.len());
                Ok(())
            }),
        )
        .await;

    assert_ok!(result);
    // Page N's handler only ever sees N requests on the server.
    assert_eq!(*fetched_per_page.lock().unwrap(), [1, 2, 3]);
    assert_eq!(*finished_calls.lock().unwrap(), [3]);
}

#[tokio::test]
async fn test_cursor_version_becomes_request_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["1"], Some("/v3/contacts?cursor=abc"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/contacts"))
        .and(query_param("cursor", "abc"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["2"], None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pages = Arc::new(Mutex::new(0));
    let pages_in_handler = pages.clone();

    let first = client.call("contacts", "list", json!({"limit": 1}));
    let result = client
        .paginate(
            first,
            move |_| {
                *pages_in_handler.lock().unwrap() += 1;
                async { Ok::<(), String>(()) }
            },
            PaginationOptions::new(),
        )
        .await;

    assert!(matches!(result, Ok(None)));
    assert_eq!(*pages.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_absolute_cursor_is_followed_on_configured_host() {
    let server = MockServer::start().await;
    let absolute = format!("{}/v2/contacts?next=p2", server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("next", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["2"], None)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["1"], Some(absolute.as_str()))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.call("contacts", "list", json!({"limit": 1}));
    let result = client
        .paginate(
            first,
            |_| async { Ok::<(), String>(()) },
            PaginationOptions::new(),
        )
        .await;

    assert_ok!(result);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_failed_second_page_calls_error_hook_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("next", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["1"], Some("/v2/contacts?next=p2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = seen.clone();
    let hook_statuses = Arc::new(Mutex::new(Vec::new()));
    let hook_statuses_in_hook = hook_statuses.clone();
    let finished = Arc::new(Mutex::new(false));
    let finished_flag = finished.clone();

    let first = client.call("contacts", "list", json!({"limit": 1}));
    let result = client
        .paginate(
            first,
            move |page| {
                collect_ids(&seen_in_handler, &page);
                async { Ok::<(), String>(()) }
            },
            PaginationOptions::new()
                .on_error(move |err| {
                    hook_statuses_in_hook
                        .lock()
                        .unwrap()
                        .push(err.as_http().and_then(HttpError::status));
                })
                .on_finished(move || async move {
                    *finished_flag.lock().unwrap() = true;
                    Ok(())
                }),
        )
        .await;

    match result {
        Err(PaginationError::Request(ResourceError::Http(e))) => assert_eq!(e.status(), Some(500)),
        other => panic!("expected request failure, got {other:?}"),
    }
    assert_eq!(*seen.lock().unwrap(), ["1"]);
    assert_eq!(*hook_statuses.lock().unwrap(), [Some(500)]);
    assert!(!*finished.lock().unwrap());
}

#[tokio::test]
async fn test_handler_failure_stops_before_next_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("next", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["2"], None)))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/contacts"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&["1"], Some("/v2/contacts?next=p2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.call("contacts", "list", json!({"limit": 1}));
    let result = client
        .paginate(
            first,
            |_| async { Err::<(), _>("storage unavailable".to_string()) },
            PaginationOptions::new(),
        )
        .await;

    assert!(matches!(
        result,
        Err(PaginationError::Handler(message)) if message == "storage unavailable"
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_limit_stops_remaining_pages() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let first = client.call("contacts", "list", json!({"limit": 2}));
    let result = client
        .paginate(
            first,
            |_| async { Ok::<(), String>(()) },
            PaginationOptions::new().max_pages(2),
        )
        .await;

    assert!(matches!(
        result,
        Err(PaginationError::PageLimitExceeded { max_pages: 2 })
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
