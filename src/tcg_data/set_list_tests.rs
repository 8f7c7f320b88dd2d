//! Tests for the set file listing.

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{fetch_set_ids, DirectoryEntry};
use crate::fetch::FetchClient;

#[test]
fn directory_entry_ignores_extra_fields() {
    let json = r#"{
        "name": "base1.json",
        "path": "cards/en/base1.json",
        "sha": "abc123",
        "size": 54321,
        "type": "file"
    }"#;

    let entry: DirectoryEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.name, "base1.json");
}

#[tokio::test]
async fn returns_sorted_ids_without_extension() {
    let mock_server = MockServer::start().await;

    let listing = serde_json::json!([
        {"name": "sv1.json"},
        {"name": "base1.json"},
        {"name": "README.md"},
        {"name": "base2.json"}
    ]);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let ids = tokio::task::spawn_blocking(move || fetch_set_ids(&FetchClient::new(), &url))
        .await
        .unwrap();

    assert_eq!(ids, Some(vec!["base1".to_string(), "base2".to_string(), "sv1".to_string()]));
}

#[tokio::test]
async fn listing_without_json_entries_yields_empty_list() {
    let mock_server = MockServer::start().await;

    let listing = serde_json::json!([{"name": "README.md"}, {"name": "LICENSE"}]);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let ids = tokio::task::spawn_blocking(move || fetch_set_ids(&FetchClient::new(), &url))
        .await
        .unwrap();

    // Empty is not None here; the pipeline decides that an empty listing is fatal
    assert_eq!(ids, Some(Vec::new()));
}

#[tokio::test]
async fn unavailable_listing_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let ids = tokio::task::spawn_blocking(move || fetch_set_ids(&FetchClient::new(), &url))
        .await
        .unwrap();

    assert_eq!(ids, None);
}
