//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::HealthResponse;

/// `GET /health` — liveness plus database connectivity.
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let db_connected = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();

    Ok(Json(HealthResponse {
        status: "ok".into(),
        db_connected,
    }))
}
