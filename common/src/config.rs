//! 設定管理
//!
//! ServiceConfig, ProviderConfig等の設定構造体

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CommonError, CommonResult};
use crate::types::Provider;

/// 1リクエストで並列に呼び出せるプロバイダー数の上限
pub const MAX_PROVIDERS: usize = 64;

/// プロバイダー設定（`{name, url}`）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    /// プロバイダー名
    pub name: String,
    /// 検証APIのURL
    pub url: String,
}

impl ProviderConfig {
    /// URLを検証して [`Provider`] に変換
    pub fn to_provider(&self) -> CommonResult<Provider> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CommonError::Config(
                "provider name must not be empty".to_string(),
            ));
        }

        let endpoint = Url::parse(&self.url).map_err(|e| {
            CommonError::Config(format!("provider '{}' has invalid url: {}", name, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CommonError::Config(format!(
                "provider '{}' url must use http or https, got '{}'",
                name,
                endpoint.scheme()
            )));
        }

        Ok(Provider::new(name, endpoint))
    }
}

/// プロバイダー一覧のYAMLドキュメント
///
/// ```yaml
/// providers:
///   - name: provider1
///     url: https://provider1.com/v1/api/account/validate
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvidersConfig {
    /// プロバイダー一覧（設定順を保持）
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

impl ProvidersConfig {
    /// YAML文字列から読み込む（空ドキュメントはエラー）
    pub fn from_yaml(source: &str) -> CommonResult<Self> {
        if source.trim().is_empty() {
            return Err(CommonError::Config("empty yaml document".to_string()));
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// 全プロバイダーを検証し、設定順のまま [`Provider`] に変換
    ///
    /// 空リスト、名前の重複、上限超過はエラー。
    pub fn to_providers(&self) -> CommonResult<Vec<Provider>> {
        if self.providers.is_empty() {
            return Err(CommonError::Config("no providers configured".to_string()));
        }
        if self.providers.len() > MAX_PROVIDERS {
            return Err(CommonError::Config(format!(
                "too many providers configured: {} (max {})",
                self.providers.len(),
                MAX_PROVIDERS
            )));
        }

        let mut seen = HashSet::with_capacity(self.providers.len());
        let mut providers = Vec::with_capacity(self.providers.len());
        for entry in &self.providers {
            let provider = entry.to_provider()?;
            if !seen.insert(provider.name.clone()) {
                return Err(CommonError::Config(format!(
                    "duplicate provider name: {}",
                    provider.name
                )));
            }
            providers.push(provider);
        }
        Ok(providers)
    }
}

/// Validatorサービス設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// プロバイダー1件あたりのタイムアウト（ミリ秒）(デフォルト: 1000)
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,

    /// リクエスト全体の応答予算（ミリ秒）(デフォルト: 2000)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// プロバイダー一覧
    #[serde(flatten)]
    pub providers: ProvidersConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_provider_timeout_ms() -> u64 {
    1000
}

fn default_request_timeout_ms() -> u64 {
    2000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            provider_timeout_ms: default_provider_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// プロバイダー呼び出しのタイムアウト
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    /// リクエスト全体の応答予算
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// バインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 設定値の整合性を検証
    ///
    /// プロバイダー呼び出しは並列に実行されるため、プロバイダー数に関係なく
    /// `provider_timeout_ms < request_timeout_ms` が成り立てば予算内に収まる。
    pub fn validate(&self) -> CommonResult<()> {
        if self.provider_timeout_ms == 0 {
            return Err(CommonError::Config(
                "provider timeout must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(CommonError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        if self.provider_timeout_ms >= self.request_timeout_ms {
            return Err(CommonError::Config(format!(
                "provider timeout ({}ms) must be shorter than request timeout ({}ms)",
                self.provider_timeout_ms, self.request_timeout_ms
            )));
        }
        self.providers.to_providers()?;
        Ok(())
    }
}
