//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use bank_validator_common::error::{CommonError, ValidatorError};
use serde_json::json;
use tracing::{error, warn};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ValidatorError);

impl From<ValidatorError> for AppError {
    fn from(err: ValidatorError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(ValidatorError::Common(err))
    }
}

impl AppError {
    /// HTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ValidatorError::InvalidPayload
            | ValidatorError::MissingAccountNumber
            | ValidatorError::EmptyAccountNumber => StatusCode::BAD_REQUEST,
            ValidatorError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ValidatorError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ValidatorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // 詳細はログのみに出し、クライアントには external_message() を返す
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Rejected request");
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}
