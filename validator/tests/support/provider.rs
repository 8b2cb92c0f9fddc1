use std::time::Duration;

use bank_validator_common::types::Provider;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 接続拒否されるアドレス
#[allow(dead_code)]
pub const UNREACHABLE: &str = "http://127.0.0.1:59999";

/// `base` 配下の `/<name>/validate` を指すプロバイダー
pub fn provider(name: &str, base: &str) -> Provider {
    let url = format!("{}/{}/validate", base, name);
    Provider::new(name, url.parse().unwrap())
}

/// `{"isValid": verdict}` を返すモックを登録
#[allow(dead_code)]
pub async fn mount_verdict(mock: &MockServer, name: &str, verdict: bool) {
    Mock::given(method("POST"))
        .and(path(format!("/{}/validate", name)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isValid": verdict })))
        .mount(mock)
        .await;
}

/// 応答を `delay` だけ遅らせるモックを登録
#[allow(dead_code)]
pub async fn mount_delayed(mock: &MockServer, name: &str, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(format!("/{}/validate", name)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "isValid": true }))
                .set_delay(delay),
        )
        .mount(mock)
        .await;
}

/// 任意のレスポンスを返すモックを登録
#[allow(dead_code)]
pub async fn mount_response(mock: &MockServer, name: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/{}/validate", name)))
        .respond_with(response)
        .mount(mock)
        .await;
}
