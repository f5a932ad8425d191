//! Authentication service — signup and login flows.

use sqlx::PgPool;
use tracing::info;

use reelcrew_core::auth::password::{hash_password, verify_password};
use reelcrew_core::auth::{jwt, queries};
use reelcrew_core::models::auth::Role;

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, MessageResponse};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Register a new user with a fixed role.
pub async fn signup(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> AppResult<MessageResponse> {
    let role: Role = role
        .parse()
        .map_err(|_| AppError::Validation("Role must be 'owner' or 'editor'".into()))?;

    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    if queries::email_exists(pool, email).await? {
        return Err(AppError::Validation("Email already registered".into()));
    }

    let pw_hash = hash_password(password)?;
    queries::create_user(pool, name, email, &pw_hash, role.as_str()).await?;

    info!(email, role = %role, "user signed up");
    Ok(MessageResponse {
        message: "Signup successful".into(),
    })
}

/// Authenticate with email + password, returning a 72-hour session token.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    let row = queries::find_user_by_email(pool, email).await?;

    // Uniform error for unknown email and wrong password alike.
    let (user_id, name, pw_hash, role) = match row {
        None => return Err(AppError::Unauthorized("Invalid email or password".into())),
        Some(r) => r,
    };

    if !verify_password(password, &pw_hash)? {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let role: Role = role
        .parse()
        .map_err(|_| AppError::Internal(format!("unknown role in users row: {role}")))?;

    let token = jwt::issue_session_token(&user_id, email, &name, role, jwt_secret)?;
    Ok(LoginResponse { token })
}
