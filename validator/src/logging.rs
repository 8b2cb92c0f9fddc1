//! ロギング初期化ユーティリティ
//!
//! `BANK_VALIDATOR_LOG_LEVEL`（未設定時は `RUST_LOG`）でフィルタを、
//! `BANK_VALIDATOR_LOG_FORMAT=json` で出力形式を切り替える。

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";

/// tracingサブスクライバーを初期化
///
/// 二重初期化はエラーになる。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = std::env::var("BANK_VALIDATOR_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let filter = EnvFilter::try_new(&level).or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))?;

    let json = std::env::var("BANK_VALIDATOR_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()?;
    }
    Ok(())
}

/// 口座番号をログ用にマスク（末尾4桁のみ残す）
pub fn mask_account_number(account_number: &str) -> String {
    let chars: Vec<char> = account_number.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{}", "*".repeat(hidden), tail)
}
