//! REST APIハンドラー
//!
//! 口座検証、ヘルスチェック

pub mod error;
pub mod health;
pub mod validate;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate::validate_account))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
