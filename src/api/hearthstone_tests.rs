//! Tests for the HearthstoneJSON client.

use std::io::Write;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{load_catalog, HearthstoneClient};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::CardRecord;

fn catalog_json() -> String {
    serde_json::json!([
        {"id": "CS2_231", "name": "Wisp", "cost": 0, "collectible": true},
        {"id": "GAME_005", "name": "The Coin", "cost": 0},
        {"id": "EX1_001", "name": "Lightwarden", "cost": 1, "collectible": true}
    ])
    .to_string()
}

fn config_for(server: &MockServer) -> Config {
    Config::default().with_api_base(format!("{}/v1/", server.uri()))
}

/// Builds the blocking client and fetches off the async runtime
async fn fetch_from(
    config: Config,
    params: Vec<(String, String)>,
) -> ApiResult<Vec<CardRecord>> {
    tokio::task::spawn_blocking(move || {
        let params: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        HearthstoneClient::new(&config)?.fetch_all(&params)
    })
    .await
    .unwrap()
}

// ── HearthstoneClient::fetch_all ─────────────────────────────────────

#[test]
fn catalog_url_from_config() {
    let client = HearthstoneClient::new(&Config::default()).unwrap();
    assert_eq!(
        client.catalog_url(),
        "https://api.hearthstonejson.com/v1/25770/enUS/cards.json"
    );
}

#[tokio::test]
async fn fetch_all_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/25770/enUS/cards.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(catalog_json()))
        .mount(&mock_server)
        .await;

    let result = fetch_from(config_for(&mock_server), Vec::new()).await;

    let cards = result.unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].name(), Some("Wisp"));
    assert!(!cards[1].is_collectible());
}

#[tokio::test]
async fn fetch_all_forwards_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/25770/enUS/cards.json"))
        .and(query_param("set", "CORE"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = vec![("set".to_string(), "CORE".to_string())];
    let result = fetch_from(config_for(&mock_server), params).await;

    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_all_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = fetch_from(config_for(&mock_server), Vec::new()).await;

    match result {
        Err(ApiError::HttpStatus(status)) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("Expected ApiError::HttpStatus(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not a catalog"))
        .mount(&mock_server)
        .await;

    let result = fetch_from(config_for(&mock_server), Vec::new()).await;

    match result {
        Err(ApiError::Parse(_)) => {}
        other => panic!("Expected ApiError::Parse, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_rejects_non_object_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
        .mount(&mock_server)
        .await;

    let result = fetch_from(config_for(&mock_server), Vec::new()).await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

// ── load_catalog ─────────────────────────────────────────────────────

#[test]
fn load_catalog_success() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "{}", catalog_json()).unwrap();

    let cards = load_catalog(tmp.path().to_str().unwrap()).unwrap();
    assert_eq!(cards.len(), 3);
}

#[test]
fn load_catalog_not_found() {
    let result = load_catalog("/nonexistent/path/cards.json");
    match result {
        Err(ApiError::Io(_)) => {}
        other => panic!("Expected ApiError::Io, got: {other:?}"),
    }
}

#[test]
fn load_catalog_malformed_json() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "{{ not valid json").unwrap();

    let result = load_catalog(tmp.path().to_str().unwrap());
    match result {
        Err(ApiError::Parse(_)) => {}
        other => panic!("Expected ApiError::Parse, got: {other:?}"),
    }
}

// ── CatalogFile ──────────────────────────────────────────────────────

#[test]
fn catalog_file_ignores_params() {
    use super::CatalogFile;
    use crate::api::CatalogSource;

    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "{}", catalog_json()).unwrap();

    let source = CatalogFile::new(tmp.path());
    let cards = source.fetch_catalog(&[("set", "CORE")]).unwrap();
    assert_eq!(cards.len(), 3);
}
