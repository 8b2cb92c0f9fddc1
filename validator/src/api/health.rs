//! ヘルスチェックAPIハンドラー

use axum::{extract::State, Json};
use bank_validator_common::protocol::HealthResponse;

use crate::AppState;

/// GET /health - 生存確認
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        providers: state.registry.len(),
    })
}
