//! 共通型定義
//!
//! Provider, ProviderOutcome, ProviderCheck等のコアデータ型

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ProviderFailure;

/// データプロバイダー
///
/// 起動時に設定から一度だけ構築され、以後は読み取り専用で共有される。
/// 同一レジストリ内では `name` が識別子となる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    /// プロバイダー名
    pub name: String,
    /// 検証APIのエンドポイント
    pub endpoint: Url,
}

impl Provider {
    /// 新しいプロバイダーを作成
    pub fn new(name: impl Into<String>, endpoint: Url) -> Self {
        Self {
            name: name.into(),
            endpoint,
        }
    }
}

/// プロバイダー単位の検証結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProviderOutcome {
    /// プロバイダー名
    pub provider: String,
    /// 口座番号が有効と判定されたか
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

impl ProviderOutcome {
    /// 障害時のデフォルト結果（`isValid: false`）
    pub fn invalid(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            is_valid: false,
        }
    }
}

/// 1回のプロバイダー呼び出しの型付き結果
///
/// `failure` が `Some` の場合、`outcome.is_valid` は常に `false`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCheck {
    /// 集約に使われる結果
    pub outcome: ProviderOutcome,
    /// 吸収された障害（成功時は `None`）
    pub failure: Option<ProviderFailure>,
}

impl ProviderCheck {
    /// プロバイダーが判定を返した
    pub fn responded(provider: impl Into<String>, is_valid: bool) -> Self {
        Self {
            outcome: ProviderOutcome {
                provider: provider.into(),
                is_valid,
            },
            failure: None,
        }
    }

    /// 障害を吸収して否定結果にする
    pub fn absorbed(provider: impl Into<String>, failure: ProviderFailure) -> Self {
        Self {
            outcome: ProviderOutcome::invalid(provider),
            failure: Some(failure),
        }
    }

    /// 障害が吸収されたか
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}
