//! check-config サブコマンド
//!
//! 設定を読み込んで検証し、プロバイダー一覧を表示します。
//! 環境ごとの設定をデプロイ前に確認する用途を想定しています。

use std::path::PathBuf;

use bank_validator_common::{config::ServiceConfig, error::CommonResult};
use clap::Args;

use crate::config::ServiceSettings;
use crate::registry::ProviderRegistry;

/// check-config サブコマンドの引数
///
/// 待ち受けアドレスは検証対象外のため、タイムアウトとプロバイダー一覧のみ受け取る。
#[derive(Args, Debug, Clone)]
pub struct CheckConfigArgs {
    /// Per-provider call timeout in milliseconds
    #[arg(
        long,
        default_value = "1000",
        env = "BANK_VALIDATOR_PROVIDER_TIMEOUT_MS"
    )]
    pub provider_timeout_ms: u64,

    /// Whole-request response budget in milliseconds
    #[arg(long, default_value = "2000", env = "BANK_VALIDATOR_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: u64,

    /// Read the provider list from a YAML file instead of the environment
    #[arg(long, env = "BANK_VALIDATOR_PROVIDERS_FILE")]
    pub providers_file: Option<PathBuf>,
}

impl From<CheckConfigArgs> for ServiceSettings {
    fn from(args: CheckConfigArgs) -> Self {
        let defaults = ServiceConfig::default();
        Self {
            host: defaults.host,
            port: defaults.port,
            provider_timeout_ms: args.provider_timeout_ms,
            request_timeout_ms: args.request_timeout_ms,
            providers_file: args.providers_file,
        }
    }
}

/// 設定を検証して要約を返す
pub fn execute(settings: ServiceSettings) -> CommonResult<String> {
    let config = settings.into_config()?;
    let registry = ProviderRegistry::from_config(&config.providers)?;

    let mut summary = format!(
        "Configuration OK: {} provider(s), provider timeout {}ms, request timeout {}ms\n",
        registry.len(),
        config.provider_timeout_ms,
        config.request_timeout_ms
    );
    for provider in registry.all() {
        summary.push_str(&format!("  {} -> {}\n", provider.name, provider.endpoint));
    }
    Ok(summary)
}
