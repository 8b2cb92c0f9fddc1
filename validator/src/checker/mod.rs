//! プロバイダークライアント
//!
//! 1プロバイダーに対して時間制限付きの検証呼び出しを1回行う。
//! 失敗（通信エラー、非2xx、不正なレスポンス、タイムアウト）はすべて
//! `isValid: false` の結果に変換され、呼び出し元へは伝播しない。

use std::time::{Duration, Instant};

use bank_validator_common::{
    error::{CommonError, CommonResult, ProviderFailure},
    protocol::{ProviderCheckRequest, ProviderCheckResponse},
    types::{Provider, ProviderCheck},
};
use reqwest::Client;
use tracing::{debug, warn};

use crate::logging::mask_account_number;

/// プロバイダークライアント
///
/// `reqwest::Client` は内部で `Arc` を持つため、タスクごとのクローンは安価。
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    timeout: Duration,
}

impl ProviderClient {
    /// タイムアウト付きのHTTPクライアントを構築
    pub fn new(timeout: Duration) -> CommonResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CommonError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, timeout))
    }

    /// 既存のHTTPクライアントを共有して作成
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// 1呼び出しあたりのタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 口座番号をプロバイダーに問い合わせる
    ///
    /// 期限は接続からボディ読み取りまでの全体に掛かる絶対値で、
    /// 期限切れの呼び出しは破棄される。
    pub async fn check(&self, account_number: &str, provider: &Provider) -> ProviderCheck {
        let started = Instant::now();
        let result = match tokio::time::timeout(
            self.timeout,
            self.request_verdict(account_number, provider),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderFailure::Timeout),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(is_valid) => {
                debug!(
                    provider = %provider.name,
                    is_valid,
                    elapsed_ms,
                    "Provider responded"
                );
                ProviderCheck::responded(&provider.name, is_valid)
            }
            Err(failure) => {
                warn!(
                    provider = %provider.name,
                    account = %mask_account_number(account_number),
                    error = %failure,
                    elapsed_ms,
                    "Provider check failed, treating account as invalid"
                );
                ProviderCheck::absorbed(&provider.name, failure)
            }
        }
    }

    async fn request_verdict(
        &self,
        account_number: &str,
        provider: &Provider,
    ) -> Result<bool, ProviderFailure> {
        let body = ProviderCheckRequest {
            account_number: account_number.to_string(),
        };

        let response = self
            .client
            .post(provider.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderFailure::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        let verdict: ProviderCheckResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ProviderFailure::MalformedBody(e.to_string()))?;

        Ok(verdict.is_valid)
    }
}

fn classify_transport_error(err: reqwest::Error) -> ProviderFailure {
    if err.is_timeout() {
        ProviderFailure::Timeout
    } else {
        ProviderFailure::Transport(err.to_string())
    }
}
