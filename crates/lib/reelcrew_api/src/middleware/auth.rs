//! Authentication middleware — Bearer token extraction and verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use reelcrew_core::auth::jwt::verify_session_token;
use reelcrew_core::models::auth::SessionClaims;

use crate::AppState;
use crate::error::AppError;

/// Key used to store `SessionClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub SessionClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// session token, and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".into()))?;

    let claims = verify_session_token(token, state.config.jwt_secret.as_bytes())
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}
