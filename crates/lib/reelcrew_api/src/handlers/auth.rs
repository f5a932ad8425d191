//! Authentication request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::services::auth;

/// `POST /auth/signup` — create a new user account.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> AppResult<Json<MessageResponse>> {
    let resp = auth::signup(
        &state.pool,
        &body.name,
        &body.email,
        &body.password,
        &body.role,
    )
    .await?;
    Ok(Json(resp))
}

/// `POST /auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        &state.pool,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}
