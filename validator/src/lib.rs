//! Bank Account Validator Server
//!
//! 口座番号を複数のデータプロバイダーへ並列に照会し、結果を集約するサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// アグリゲーター（並列照会と結果の集約）
pub mod aggregator;

/// プロバイダークライアント（時間制限付きの単一照会）
pub mod checker;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー、プロバイダー一覧の読み込み）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// プロバイダーレジストリ
pub mod registry;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

use std::time::Duration;

use bank_validator_common::{config::ServiceConfig, error::CommonResult};

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// プロバイダーレジストリ（読み取り専用）
    pub registry: registry::ProviderRegistry,
    /// アグリゲーター
    pub aggregator: aggregator::Aggregator,
    /// リクエスト全体の応答予算
    pub request_timeout: Duration,
}

impl AppState {
    /// 構成要素からアプリケーション状態を作成
    pub fn new(
        registry: registry::ProviderRegistry,
        aggregator: aggregator::Aggregator,
        request_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            aggregator,
            request_timeout,
        }
    }

    /// 検証済みの設定からアプリケーション状態を構築
    pub fn from_config(config: &ServiceConfig) -> CommonResult<Self> {
        config.validate()?;
        let registry = registry::ProviderRegistry::from_config(&config.providers)?;
        let client = checker::ProviderClient::new(config.provider_timeout())?;
        Ok(Self::new(
            registry,
            aggregator::Aggregator::new(client),
            config.request_timeout(),
        ))
    }
}
