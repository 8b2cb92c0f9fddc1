//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! プロバイダー単位の障害（[`ProviderFailure`]）は集約処理の中で吸収され、
//! 呼び出し元へは伝播しない。[`ValidatorError`] はリクエスト単位の失敗のみを表す。

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parse error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Validator error type
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Request body is not valid JSON
    #[error("invalid json payload")]
    InvalidPayload,

    /// `accountNumber` is absent from the payload
    #[error("account number missing from payload")]
    MissingAccountNumber,

    /// `accountNumber` is present but blank
    #[error("account number must not be empty")]
    EmptyAccountNumber,

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ValidatorError {
    /// Returns a safe error message for external clients.
    ///
    /// Request validation errors are returned verbatim; everything else is
    /// replaced by a generic message so provider URLs and internal details
    /// only ever appear in server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Request error",
            Self::InvalidPayload => "invalid json payload",
            Self::MissingAccountNumber => "account number missing from payload",
            Self::EmptyAccountNumber => "account number must not be empty",
            Self::Timeout(_) => "Request timeout",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// クライアント起因のエラーか
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPayload | Self::MissingAccountNumber | Self::EmptyAccountNumber
        )
    }
}

/// Provider call failure absorbed into an `isValid: false` outcome
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderFailure {
    /// The per-call deadline expired
    #[error("provider call timed out")]
    Timeout,

    /// Connection or transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("provider returned status {0}")]
    Status(u16),

    /// Response body is not `{"isValid": bool}`
    #[error("malformed provider response: {0}")]
    MalformedBody(String),
}

/// Common layer Result type alias
pub type CommonResult<T> = Result<T, CommonError>;

/// Validator Result type alias
pub type ValidatorResult<T> = Result<T, ValidatorError>;
