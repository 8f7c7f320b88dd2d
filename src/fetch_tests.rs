//! Tests for the retrying JSON fetcher.

use serde::Deserialize;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::FetchClient;

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    value: u32,
}

fn fetch_payload(url: String) -> impl FnOnce() -> Option<Payload> {
    move || FetchClient::new().fetch_json(&url)
}

// ── fetch_json: success paths ────────────────────────────────────────

#[tokio::test]
async fn success_on_first_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/data.json", mock_server.uri());
    let result = tokio::task::spawn_blocking(fetch_payload(url)).await.unwrap();

    assert_eq!(result, Some(Payload { value: 7 }));
}

#[tokio::test]
async fn recovers_after_transient_server_error() {
    let mock_server = MockServer::start().await;

    // First request fails, the retry succeeds
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 42}"#))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = tokio::task::spawn_blocking(fetch_payload(url)).await.unwrap();

    assert_eq!(result, Some(Payload { value: 42 }));
}

#[tokio::test]
async fn malformed_body_is_retried_like_any_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not valid json"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 3}"#))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = tokio::task::spawn_blocking(fetch_payload(url)).await.unwrap();

    assert_eq!(result, Some(Payload { value: 3 }));
}

// ── fetch_json: exhaustion ───────────────────────────────────────────

#[tokio::test]
async fn gives_up_after_three_attempts() {
    let mock_server = MockServer::start().await;

    // expect(3) verifies the attempt count when the server drops
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = tokio::task::spawn_blocking(fetch_payload(url)).await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn not_found_exhausts_retries_and_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = tokio::task::spawn_blocking(fetch_payload(url)).await.unwrap();

    assert_eq!(result, None);
}

// ── request shape ────────────────────────────────────────────────────

#[tokio::test]
async fn sends_identifying_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "Pokemon-Card-Tracker/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 1}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = tokio::task::spawn_blocking(fetch_payload(url)).await.unwrap();

    assert_eq!(result, Some(Payload { value: 1 }));
}
