//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names, and the provider list loader.
//!
//! The provider list is a YAML document (`providers: [{name, url}]`) read
//! from `BANK_VALIDATOR_PROVIDERS` (deprecated: `PROVIDERS`) or from a file.
//! Per-environment deployments set a different document per stage.

use std::path::Path;

use bank_validator_common::config::{ProvidersConfig, ServiceConfig};
use bank_validator_common::error::{CommonError, CommonResult};

/// プロバイダー一覧を保持する環境変数
pub const PROVIDERS_ENV: &str = "BANK_VALIDATOR_PROVIDERS";

/// 旧名（非推奨）
pub const LEGACY_PROVIDERS_ENV: &str = "PROVIDERS";

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// 環境変数からプロバイダー一覧を読み込む
pub fn load_providers_from_env() -> CommonResult<ProvidersConfig> {
    let raw = get_env_with_fallback(PROVIDERS_ENV, LEGACY_PROVIDERS_ENV)
        .ok_or_else(|| CommonError::Config("ENVVAR PROVIDERS is required".to_string()))?;
    parse_providers(&raw)
}

/// ファイルからプロバイダー一覧を読み込む
pub fn load_providers_from_file(path: &Path) -> CommonResult<ProvidersConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CommonError::Config(format!(
            "failed to read providers file {}: {}",
            path.display(),
            e
        ))
    })?;
    ProvidersConfig::from_yaml(&raw).map_err(|e| {
        CommonError::Config(format!(
            "providers file {} is invalid yaml: {}",
            path.display(),
            e
        ))
    })
}

fn parse_providers(raw: &str) -> CommonResult<ProvidersConfig> {
    ProvidersConfig::from_yaml(raw).map_err(|e| {
        tracing::debug!(error = %e, "Failed to parse providers yaml");
        CommonError::Config("ENVVAR PROVIDERS is invalid yaml".to_string())
    })
}

/// サーバー設定の入力値（CLI引数または環境変数）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// バインドホスト
    pub host: String,
    /// ポート
    pub port: u16,
    /// プロバイダー1件あたりのタイムアウト（ミリ秒）
    pub provider_timeout_ms: u64,
    /// リクエスト全体の応答予算（ミリ秒）
    pub request_timeout_ms: u64,
    /// プロバイダー一覧ファイル（未指定なら環境変数）
    pub providers_file: Option<std::path::PathBuf>,
}

impl ServiceSettings {
    /// 環境変数から読み込む（サブコマンド省略時）
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            host: get_env_with_fallback_or(
                "BANK_VALIDATOR_HOST",
                "BANK_VALIDATOR_HOST",
                &defaults.host,
            ),
            port: get_env_with_fallback_parse(
                "BANK_VALIDATOR_PORT",
                "BANK_VALIDATOR_PORT",
                defaults.port,
            ),
            provider_timeout_ms: get_env_with_fallback_parse(
                "BANK_VALIDATOR_PROVIDER_TIMEOUT_MS",
                "BANK_VALIDATOR_PROVIDER_TIMEOUT_MS",
                defaults.provider_timeout_ms,
            ),
            request_timeout_ms: get_env_with_fallback_parse(
                "BANK_VALIDATOR_REQUEST_TIMEOUT_MS",
                "BANK_VALIDATOR_REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
            ),
            providers_file: get_env_with_fallback(
                "BANK_VALIDATOR_PROVIDERS_FILE",
                "BANK_VALIDATOR_PROVIDERS_FILE",
            )
            .map(Into::into),
        }
    }

    /// プロバイダー一覧を読み込み、検証済みの [`ServiceConfig`] を構築
    pub fn into_config(self) -> CommonResult<ServiceConfig> {
        let providers = match &self.providers_file {
            Some(path) => load_providers_from_file(path)?,
            None => load_providers_from_env()?,
        };

        let config = ServiceConfig {
            host: self.host,
            port: self.port,
            provider_timeout_ms: self.provider_timeout_ms,
            request_timeout_ms: self.request_timeout_ms,
            providers,
        };
        config.validate()?;
        Ok(config)
    }
}
