//! Integration Test: 口座検証API (POST /validate)
//!
//! 実ポートで起動したValidatorに対し、wiremockのプロバイダーを使って検証する。

use std::collections::HashMap;

use bank_validator_common::protocol::ValidationResponse;
use reqwest::Client;
use serde_json::{json, Value};
use wiremock::MockServer;

use crate::support::http::spawn_default_validator;
use crate::support::provider::{mount_verdict, provider};

fn by_name(response: &ValidationResponse) -> HashMap<String, bool> {
    response
        .results
        .iter()
        .map(|o| (o.provider.clone(), o.is_valid))
        .collect()
}

/// シナリオ: provider1が `{isValid: true}` を返す
#[tokio::test]
async fn test_single_provider_valid() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", true).await;

    let server = spawn_default_validator(vec![provider("provider1", &mock.uri())]).await;

    let resp = Client::new()
        .post(server.validate_url())
        .json(&json!({"accountNumber": "12345678"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"results": [{"provider": "provider1", "isValid": true}]})
    );

    server.stop().await;
}

/// 全プロバイダーの結果が名前ごとに1件ずつ返る
#[tokio::test]
async fn test_all_providers_queried_without_filter() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", true).await;
    mount_verdict(&mock, "provider2", false).await;
    mount_verdict(&mock, "provider3", true).await;

    let server = spawn_default_validator(vec![
        provider("provider1", &mock.uri()),
        provider("provider2", &mock.uri()),
        provider("provider3", &mock.uri()),
    ])
    .await;

    let response: ValidationResponse = Client::new()
        .post(server.validate_url())
        .json(&json!({"accountNumber": "12345678"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let expected: HashMap<String, bool> = [
        ("provider1".to_string(), true),
        ("provider2".to_string(), false),
        ("provider3".to_string(), true),
    ]
    .into_iter()
    .collect();
    assert_eq!(response.results.len(), 3);
    assert_eq!(by_name(&response), expected);

    server.stop().await;
}

/// フィルタ指定時は指定されたプロバイダーのみ呼び出され、未知の名前は無視される
#[tokio::test]
async fn test_provider_filter_skips_unselected_and_unknown() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", true).await;
    mount_verdict(&mock, "provider2", true).await;

    let server = spawn_default_validator(vec![
        provider("provider1", &mock.uri()),
        provider("provider2", &mock.uri()),
    ])
    .await;

    let response: ValidationResponse = Client::new()
        .post(server.validate_url())
        .json(&json!({
            "accountNumber": "12345678",
            "providers": ["provider1", "provider3", "provider1"]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.results.len(), 1);
    assert!(response.outcome_for("provider1").unwrap().is_valid);

    let received = mock.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/provider1/validate");
    let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(sent, json!({"accountNumber": "12345678"}));

    server.stop().await;
}

/// 空のフィルタはプロバイダーを呼ばずに空の結果を返す
#[tokio::test]
async fn test_empty_filter_calls_no_provider() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", true).await;

    let server = spawn_default_validator(vec![provider("provider1", &mock.uri())]).await;

    let resp = Client::new()
        .post(server.validate_url())
        .json(&json!({"accountNumber": "12345678", "providers": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"results": []}));
    assert!(mock.received_requests().await.unwrap().is_empty());

    server.stop().await;
}

/// accountNumber欠落時はコアを呼ばずにエラーを返す
#[tokio::test]
async fn test_missing_account_number_never_reaches_providers() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", true).await;

    let server = spawn_default_validator(vec![provider("provider1", &mock.uri())]).await;

    let resp = Client::new()
        .post(server.validate_url())
        .json(&json!({"david": "12345678"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"error": "account number missing from payload"}));
    assert!(mock.received_requests().await.unwrap().is_empty());

    server.stop().await;
}

/// Content-Typeがなくてもボディを解釈する
#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", false).await;

    let server = spawn_default_validator(vec![provider("provider1", &mock.uri())]).await;

    let resp = Client::new()
        .post(server.validate_url())
        .body(r#"{"accountNumber": "12345678"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"results": [{"provider": "provider1", "isValid": false}]})
    );

    server.stop().await;
}

/// 同時リクエストでも各レスポンスは独立している
#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let mock = MockServer::start().await;
    mount_verdict(&mock, "provider1", true).await;
    mount_verdict(&mock, "provider2", false).await;

    let server = spawn_default_validator(vec![
        provider("provider1", &mock.uri()),
        provider("provider2", &mock.uri()),
    ])
    .await;
    let client = Client::new();
    let url = server.validate_url();

    let requests = (0..10).map(|i| {
        let client = client.clone();
        let url = url.clone();
        async move {
            client
                .post(&url)
                .json(&json!({"accountNumber": format!("0000{}", i)}))
                .send()
                .await
                .unwrap()
                .json::<ValidationResponse>()
                .await
                .unwrap()
        }
    });

    for response in futures::future::join_all(requests).await {
        assert_eq!(response.results.len(), 2);
        assert!(response.outcome_for("provider1").unwrap().is_valid);
        assert!(!response.outcome_for("provider2").unwrap().is_valid);
    }

    server.stop().await;
}
