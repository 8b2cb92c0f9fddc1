//! serve サブコマンド
//!
//! Validatorサーバーを起動します。

use std::path::PathBuf;

use clap::Args;

use crate::config::ServiceSettings;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "8080", env = "BANK_VALIDATOR_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "BANK_VALIDATOR_HOST")]
    pub host: String,

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

impl From<ServeArgs> for ServiceSettings {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            provider_timeout_ms: args.provider_timeout_ms,
            request_timeout_ms: args.request_timeout_ms,
            providers_file: args.providers_file,
        }
    }
}
