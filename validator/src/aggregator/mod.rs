//! アグリゲーター
//!
//! 選択されたプロバイダーへ並列に問い合わせ、全結果が揃うまで待って
//! 1つのレスポンスにまとめる。コア内で並行処理を待ち合わせるのはここだけ。

use std::sync::Arc;
use std::time::Instant;

use bank_validator_common::{
    error::{ValidatorError, ValidatorResult},
    protocol::ValidationResponse,
    types::{Provider, ProviderCheck},
};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::checker::ProviderClient;

/// アグリゲーター
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: ProviderClient,
}

impl Aggregator {
    /// 新しいアグリゲーターを作成
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    /// プロバイダークライアント
    pub fn client(&self) -> &ProviderClient {
        &self.client
    }

    /// 全プロバイダーの検証結果を集約
    ///
    /// 結果はプロバイダーごとに必ず1件。順序は完了順で不定。
    pub async fn aggregate(
        &self,
        account_number: &str,
        providers: Vec<Provider>,
    ) -> ValidatorResult<ValidationResponse> {
        let checks = self.check_all(account_number, providers).await?;
        Ok(ValidationResponse {
            results: checks.into_iter().map(|check| check.outcome).collect(),
        })
    }

    /// 全プロバイダーへ並列に問い合わせ、型付きの結果を完了順で返す
    ///
    /// 各タスクは自身のタイムアウト内で必ず終了する。
    /// タスク自体が失敗（panic等）した場合のみエラーを返す。
    pub async fn check_all(
        &self,
        account_number: &str,
        providers: Vec<Provider>,
    ) -> ValidatorResult<Vec<ProviderCheck>> {
        if providers.is_empty() {
            debug!("No providers selected, skipping fan-out");
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let total = providers.len();
        let account: Arc<str> = Arc::from(account_number);

        let mut tasks = JoinSet::new();
        for provider in providers {
            let client = self.client.clone();
            let account = Arc::clone(&account);
            tasks.spawn(async move { client.check(&account, &provider).await });
        }

        let mut checks = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(check) => checks.push(check),
                Err(e) => {
                    // JoinSetのdropで残りのタスクは中断される
                    error!(error = %e, "Provider check task failed");
                    return Err(ValidatorError::Internal(format!(
                        "provider check task failed: {}",
                        e
                    )));
                }
            }
        }

        let valid = checks.iter().filter(|c| c.outcome.is_valid).count();
        let failed = checks.iter().filter(|c| c.is_failure()).count();
        info!(
            total,
            valid,
            failed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Provider checks completed"
        );

        Ok(checks)
    }
}
