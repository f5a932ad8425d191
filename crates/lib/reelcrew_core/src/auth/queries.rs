//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;

/// Fetch a user by email, returning (id, name, password_hash, role).
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<(String, String, String, String)>, AuthError> {
    let row = sqlx::query_as::<_, (String, String, String, String)>(
        "SELECT id::text, name, password_hash, role FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create a new user, returning the user ID.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
) -> Result<String, AuthError> {
    let user_id = sqlx::query_scalar::<_, String>(
        "INSERT INTO users (name, email, password_hash, role) \
         VALUES ($1, $2, $3, $4) RETURNING id::text",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;
    Ok(user_id)
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}
