//! Tests for manifest retrieval and flattening.

use reqwest::Url;
use serde_json::json;
use soundboard_dl::manifest::{fetch_manifest, flatten};
use soundboard_dl::{create_http_client, Error, HttpClientConfig};

mod common;
use common::helpers::*;

#[test]
fn test_flatten_preserves_order_and_length() {
    let nested: Vec<Vec<String>> = (0..7)
        .map(|g| (0..g).map(|i| format!("{g}-{i}")).collect())
        .collect();
    let expected: Vec<String> = nested.iter().flatten().cloned().collect();

    let flat = flatten(nested);
    assert_eq!(flat.len(), 21);
    assert_eq!(flat, expected);
}

#[tokio::test]
async fn test_fetch_manifest() {
    let server = start_board(json!([[button("a/b")], [button("c")]])).await;
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let base = Url::parse(&server.uri()).unwrap();

    let items = fetch_manifest(&client, &base).await.unwrap().into_items();

    let names: Vec<_> = items.iter().map(|i| i.file_name.as_str()).collect();
    assert_eq!(names, vec!["a/b", "c"]);
    assert_eq!(items[0].value, json!({ "label": "a/b" }));
}

#[tokio::test]
async fn test_fetch_manifest_not_found() {
    let server = wiremock::MockServer::start().await;
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let base = Url::parse(&server.uri()).unwrap();

    let err = fetch_manifest(&client, &base).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("404 Not Found: {}{}", server.uri(), MANIFEST_PATH)
    );
}

#[tokio::test]
async fn test_fetch_manifest_bad_json() {
    let server = start_board(json!("just a string")).await;
    let client = create_http_client(HttpClientConfig::default()).unwrap();
    let base = Url::parse(&server.uri()).unwrap();

    let err = fetch_manifest(&client, &base).await.unwrap_err();
    assert!(matches!(err, Error::Manifest { .. }), "{err:?}");
}
