//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, "forbidden", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Conflict(m) => (StatusCode::CONFLICT, "conflict", m.as_str()),
            AppError::Upstream(m) => (StatusCode::BAD_GATEWAY, "upstream_error", m.as_str()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<reelcrew_core::auth::AuthError> for AppError {
    fn from(e: reelcrew_core::auth::AuthError) -> Self {
        use reelcrew_core::auth::AuthError;
        match e {
            AuthError::CredentialError => AppError::Unauthorized("Invalid credentials".into()),
            AuthError::InvalidToken => {
                AppError::Unauthorized("Invalid or expired session token".into())
            }
            AuthError::TokenError(msg) => AppError::Internal(msg),
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::DbError(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<reelcrew_core::youtube::YouTubeError> for AppError {
    fn from(e: reelcrew_core::youtube::YouTubeError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl From<reelcrew_core::channels::ChannelError> for AppError {
    fn from(e: reelcrew_core::channels::ChannelError) -> Self {
        use reelcrew_core::channels::ChannelError;
        match e {
            ChannelError::ChannelInUse(id) => {
                AppError::Conflict(format!("Channel {id} is referenced by existing projects"))
            }
            ChannelError::Db(e) => AppError::from(e),
            ChannelError::YouTube(e) => AppError::from(e),
        }
    }
}

impl From<reelcrew_core::projects::ProjectError> for AppError {
    fn from(e: reelcrew_core::projects::ProjectError) -> Self {
        use reelcrew_core::projects::ProjectError;
        match e {
            ProjectError::NoOwnerAvailable => {
                AppError::Conflict("No owner available for project assignment".into())
            }
            ProjectError::Db(e) => AppError::from(e),
        }
    }
}
