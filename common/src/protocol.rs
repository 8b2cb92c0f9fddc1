//! 通信プロトコル定義
//!
//! クライアント↔Validator、Validator↔プロバイダー間のメッセージ

use serde::{Deserialize, Serialize};

use crate::types::ProviderOutcome;

/// 口座検証リクエスト（受信ペイロード）
///
/// `accountNumber` の有無はハンドラーで検証するため `Option` で受ける。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationRequest {
    /// 口座番号
    #[serde(rename = "accountNumber", default)]
    pub account_number: Option<String>,
    /// 問い合わせ対象のプロバイダー名（省略時は全プロバイダー）
    #[serde(default)]
    pub providers: Option<Vec<String>>,
}

/// 口座検証レスポンス
///
/// 選択されたプロバイダーごとに必ず1件の結果を含む。順序は不定。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResponse {
    /// プロバイダー別の結果
    pub results: Vec<ProviderOutcome>,
}

impl ValidationResponse {
    /// 指定プロバイダーの結果を取得
    pub fn outcome_for(&self, provider: &str) -> Option<&ProviderOutcome> {
        self.results.iter().find(|o| o.provider == provider)
    }
}

/// プロバイダーへ送信するリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderCheckRequest {
    /// 口座番号
    #[serde(rename = "accountNumber")]
    pub account_number: String,
}

/// プロバイダーから受信するレスポンス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderCheckResponse {
    /// 有効判定
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// 状態 ("ok")
    pub status: String,
    /// 設定済みプロバイダー数
    pub providers: usize,
}
