//! Channel and linked-account queries.

use std::collections::HashSet;

use sqlx::PgPool;

use super::ChannelError;

/// Linked YouTube account row, tokens included.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct YouTubeAccountRow {
    pub id: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Fetch all linked YouTube accounts for a user.
pub async fn list_accounts(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<YouTubeAccountRow>, ChannelError> {
    let rows = sqlx::query_as::<_, YouTubeAccountRow>(
        "SELECT id::text AS id, email, access_token, refresh_token \
         FROM youtube_accounts WHERE user_id = $1::uuid",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Upsert the linked-account row for `(user_id, email)`.
///
/// A single conflict-resolving statement so concurrent callbacks for the
/// same external account serialize at the row; last writer wins on tokens.
pub async fn upsert_account(
    pool: &PgPool,
    user_id: &str,
    email: &str,
    access_token: &str,
    refresh_token: &str,
) -> Result<(), ChannelError> {
    sqlx::query(
        r#"
        INSERT INTO youtube_accounts (user_id, email, access_token, refresh_token)
        VALUES ($1::uuid, $2, $3, $4)
        ON CONFLICT (user_id, email)
        DO UPDATE SET access_token = EXCLUDED.access_token,
                      refresh_token = EXCLUDED.refresh_token,
                      updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(email)
    .bind(access_token)
    .bind(refresh_token)
    .execute(pool)
    .await?;
    Ok(())
}

/// Remote channel ids already attached for this owner, across all accounts.
pub async fn attached_channel_ids(
    pool: &PgPool,
    owner_id: &str,
) -> Result<HashSet<String>, ChannelError> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT yt_channel_id FROM channels WHERE owner_id = $1::uuid",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;
    Ok(ids.into_iter().collect())
}
