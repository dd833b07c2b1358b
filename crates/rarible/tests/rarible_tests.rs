// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `RaribleClient`
//!
//! These tests use wiremock to mock upstream HTTP responses and verify the
//! client's request shape, payload passthrough, and error mapping.

use std::time::Duration;

use nft_client::{ClientError, NftApi, TraitProperty, TraitRarity};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use fixtures::*;

use rarible::RaribleClient;

const TEST_OWNERSHIP_ID: &str =
    "ETHEREUM:0xb66a603f4cfe17e3d27b87a8bfcad319856518b8:32292:0x4765273c477c2dc484da4f1984639e943adccfeb";

/// Ownership payloads pass through field for field
#[tokio::test]
async fn get_ownership_success() {
    let mock_server = MockServer::start().await;
    let client = RaribleClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/ownerships/{TEST_OWNERSHIP_ID}")))
        .and(header("X-API-KEY", TEST_API_KEY))
        .and(header("Referer", TEST_REFERER))
        .respond_with(ResponseTemplate::new(200).set_body_json(ownership_response()))
        .mount(&mock_server)
        .await;

    let ownership = client.get_ownership(TEST_OWNERSHIP_ID).await.unwrap();

    assert_eq!(ownership.id, TEST_OWNERSHIP_ID);
    assert_eq!(ownership.blockchain, "ETHEREUM");
    assert_eq!(ownership.value, "21");
    assert_eq!(ownership.lazy_value, "0");
    let creators = ownership.creators.expect("creators present");
    assert_eq!(creators.len(), 1);
    assert_eq!(creators[0].value, 10000);
}

/// Non-success responses surface the upstream message verbatim
#[tokio::test]
async fn get_ownership_upstream_error_message_verbatim() {
    let mock_server = MockServer::start().await;
    let client = RaribleClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path("/ownerships/invalid-id"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Illegal format for ID: 'invalid-id', blockchain prefix not found"
        })))
        .mount(&mock_server)
        .await;

    let result = client.get_ownership("invalid-id").await;

    match result.unwrap_err() {
        ClientError::Upstream { message } => {
            assert_eq!(
                message,
                "Illegal format for ID: 'invalid-id', blockchain prefix not found"
            );
        }
        other => panic!("Expected Upstream error, got: {other:?}"),
    }
}

/// A 200 with a body that does not match the expected shape is a decode error
#[tokio::test]
async fn get_ownership_decode_error() {
    let mock_server = MockServer::start().await;
    let client = RaribleClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path("/ownerships/some-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let result = client.get_ownership("some-id").await;
    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

/// A non-success response without a JSON error body is a decode error too
#[tokio::test]
async fn get_ownership_error_body_not_json() {
    let mock_server = MockServer::start().await;
    let client = RaribleClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path("/ownerships/some-id"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let result = client.get_ownership("some-id").await;
    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

/// Unreachable upstream maps to a transport error
#[tokio::test]
async fn get_ownership_transport_error() {
    // Nothing listens on this port
    let client =
        RaribleClient::new(create_test_config("http://127.0.0.1:9".to_string())).unwrap();

    let result = client.get_ownership("some-id").await;
    assert!(matches!(result, Err(ClientError::Transport { .. })));
}

/// A response slower than the configured timeout is a timeout, not a
/// transport failure
#[tokio::test]
async fn get_ownership_timeout() {
    let mock_server = MockServer::start().await;

    let mut config = create_test_config(mock_server.uri());
    config.timeout_seconds = 1;
    let client = RaribleClient::new(config).unwrap();

    Mock::given(method("GET"))
        .and(path("/ownerships/slow-id"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ownership_response())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let result = client.get_ownership("slow-id").await;

    match result.unwrap_err() {
        ClientError::Timeout { timeout_seconds } => assert_eq!(timeout_seconds, 1),
        other => panic!("Expected Timeout error, got: {other:?}"),
    }
}

/// Rarity lookups POST the documented request body and pass the result through
#[tokio::test]
async fn get_traits_rarity_success() {
    let mock_server = MockServer::start().await;
    let client = RaribleClient::new(create_test_config(mock_server.uri())).unwrap();

    let collection_id = "ETHEREUM:0x60e4d786628fea6478f785a6d7e704777c86a7c6";
    let properties = vec![TraitProperty {
        key: "Key1".to_string(),
        value: "Value1".to_string(),
    }];

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .and(header("X-API-KEY", TEST_API_KEY))
        .and(header("Referer", TEST_REFERER))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "collectionId": collection_id,
            "properties": [{"key": "Key1", "value": "Value1"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(traits_rarity_response()))
        .mount(&mock_server)
        .await;

    let rarity = client
        .get_traits_rarity(collection_id, &properties)
        .await
        .unwrap();

    assert_eq!(
        rarity.traits,
        vec![TraitRarity {
            key: "Key1".to_string(),
            value: "Value1".to_string(),
            rarity: "0".to_string()
        }]
    );
}

/// Rarity lookups surface upstream failures verbatim as well
#[tokio::test]
async fn get_traits_rarity_upstream_error() {
    let mock_server = MockServer::start().await;
    let client = RaribleClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("POST"))
        .and(path("/items/traits/rarity"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Unexpected server error"})),
        )
        .mount(&mock_server)
        .await;

    let result = client.get_traits_rarity("invalid-collection-id", &[]).await;

    match result.unwrap_err() {
        ClientError::Upstream { message } => assert_eq!(message, "Unexpected server error"),
        other => panic!("Expected Upstream error, got: {other:?}"),
    }
}
