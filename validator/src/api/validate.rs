//! 口座検証APIハンドラー

use std::time::Instant;

use axum::{body::Bytes, extract::State, Json};
use bank_validator_common::{
    error::{ValidatorError, ValidatorResult},
    protocol::{ValidationRequest, ValidationResponse},
};
use tracing::{debug, info};

use crate::{api::error::AppError, logging::mask_account_number, AppState};

/// 検証済みの受信リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// 口座番号（空でないことを保証）
    pub account_number: String,
    /// プロバイダー名フィルタ（`None` は全プロバイダー）
    pub providers: Option<Vec<String>>,
}

/// 受信ペイロードをデコードして検証
///
/// Content-Typeに関係なくボディをJSONとして扱う。
pub fn parse_request(body: &[u8]) -> ValidatorResult<ParsedRequest> {
    let request: ValidationRequest =
        serde_json::from_slice(body).map_err(|_| ValidatorError::InvalidPayload)?;

    let account_number = request
        .account_number
        .ok_or(ValidatorError::MissingAccountNumber)?;
    if account_number.trim().is_empty() {
        return Err(ValidatorError::EmptyAccountNumber);
    }

    Ok(ParsedRequest {
        account_number,
        providers: request.providers,
    })
}

/// POST /validate - 口座番号をプロバイダーに並列照会
pub async fn validate_account(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ValidationResponse>, AppError> {
    let request = parse_request(&body)?;
    let providers = state.registry.filter(request.providers.as_deref());

    debug!(
        account = %mask_account_number(&request.account_number),
        selected = providers.len(),
        "Validating account"
    );

    let started = Instant::now();
    let response = tokio::time::timeout(
        state.request_timeout,
        state
            .aggregator
            .aggregate(&request.account_number, providers),
    )
    .await
    .map_err(|_| {
        ValidatorError::Timeout(format!(
            "validation exceeded request budget of {}ms",
            state.request_timeout.as_millis()
        ))
    })??;

    info!(
        account = %mask_account_number(&request.account_number),
        results = response.results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Account validation completed"
    );

    Ok(Json(response))
}
