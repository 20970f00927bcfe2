//! Integration tests for `MallClient::fetch_points`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. Covers the happy paths (populated and empty
//! tenant lists, both vendors) and every error variant the fetch can
//! propagate.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mallwatch_ingest::{IngestError, MallClient, Source};

const STAMP: &str = "2026-08-30 12:00:00";

fn test_client() -> MallClient {
    MallClient::new(5, "mallwatch-test/0.1").expect("failed to build test MallClient")
}

#[tokio::test]
async fn aviapark_fetch_maps_departments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "departments": [
                {"id": "1", "title": "Shop A", "categories": ["food"], "status": "opened"}
            ]
        })))
        .mount(&server)
        .await;

    let points = test_client()
        .fetch_points(Source::Aviapark, Some(&server.uri()), STAMP)
        .await
        .unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].name, "Shop A");
    assert_eq!(points[0].parsed_categories, vec!["food"]);
    assert_eq!(points[0].parsing_date, STAMP);
}

#[tokio::test]
async fn riviera_fetch_sends_limit_and_maps_tenants() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tenants"))
        .and(query_param("limit", "1500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "payload": {"data": [{"id": 7, "title": "Shop B", "status": "closed"}]}
        })))
        .mount(&server)
        .await;

    let points = test_client()
        .fetch_points(Source::Riviera, Some(&server.uri()), STAMP)
        .await
        .unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].id, "7");
    assert_eq!(points[0].status, "closed");
    assert!(points[0].parsed_categories.is_empty());
}

#[tokio::test]
async fn empty_tenant_list_is_ok_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"departments": []})))
        .mount(&server)
        .await;

    let points = test_client()
        .fetch_points(Source::Aviapark, Some(&server.uri()), STAMP)
        .await
        .unwrap();
    assert!(points.is_empty());
}

#[tokio::test]
async fn server_error_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/departments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_points(Source::Aviapark, Some(&server.uri()), STAMP)
        .await
        .unwrap_err();
    assert!(
        matches!(err, IngestError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_points(Source::Aviapark, Some(&server.uri()), STAMP)
        .await
        .unwrap_err();
    assert!(
        matches!(err, IngestError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn wrong_envelope_shape_is_a_missing_payload_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tenants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"data": []})))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_points(Source::Riviera, Some(&server.uri()), STAMP)
        .await
        .unwrap_err();
    assert!(
        matches!(err, IngestError::MissingPayload { field: "payload.data", .. }),
        "expected MissingPayload(payload.data), got: {err:?}"
    );
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    // Port 9 (discard) is a safe never-listening target.
    let err = test_client()
        .fetch_points(Source::Aviapark, Some("http://127.0.0.1:9"), STAMP)
        .await
        .unwrap_err();
    assert!(
        matches!(err, IngestError::Http(_)),
        "expected Http, got: {err:?}"
    );
}
