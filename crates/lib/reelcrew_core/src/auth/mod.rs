//! Authentication logic.
//!
//! Provides password hashing, session-token management, and user queries
//! shared across the API and server crates.

pub mod jwt;
pub mod password;
pub mod queries;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    CredentialError,

    /// Covers malformed signatures and expired tokens alike; callers treat
    /// both as "not authenticated".
    #[error("Invalid or expired session token")]
    InvalidToken,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
