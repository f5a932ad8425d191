//! Diff-and-apply reconciliation of attached channels.

use std::collections::HashSet;

use sqlx::PgPool;
use tracing::{info, warn};

use super::queries;
use super::{ChannelError, SelectedChannel, UnattachedChannel};
use crate::youtube::{self, GoogleConfig};

/// Insert/delete sets produced by diffing a desired channel set against
/// the currently attached `yt_channel_id`s.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub to_add: Vec<SelectedChannel>,
    pub to_remove: Vec<String>,
}

impl ReconcilePlan {
    /// Compute the set difference. Duplicate desired entries collapse to a
    /// single add; removals are everything attached but no longer desired.
    pub fn compute(existing: &HashSet<String>, desired: &[SelectedChannel]) -> Self {
        let mut desired_ids: HashSet<String> = HashSet::with_capacity(desired.len());
        let mut to_add = Vec::new();
        for ch in desired {
            if !desired_ids.insert(ch.id.clone()) {
                continue;
            }
            if !existing.contains(&ch.id) {
                to_add.push(ch.clone());
            }
        }
        let mut to_remove: Vec<String> = existing
            .iter()
            .filter(|id| !desired_ids.contains(id.as_str()))
            .cloned()
            .collect();
        to_remove.sort();
        Self { to_add, to_remove }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Make the persisted channel rows for `owner_id` match `desired`.
///
/// Inserts and deletes apply in one transaction; on any failure nothing is
/// visible. Submitting the same set twice makes the second call a no-op,
/// and concurrent divergent submissions resolve to the later commit.
pub async fn reconcile(
    pool: &PgPool,
    owner_id: &str,
    desired: &[SelectedChannel],
) -> Result<(), ChannelError> {
    let mut tx = pool.begin().await?;

    let existing: HashSet<String> = sqlx::query_scalar::<_, String>(
        "SELECT yt_channel_id FROM channels WHERE owner_id = $1::uuid",
    )
    .bind(owner_id)
    .fetch_all(&mut *tx)
    .await?
    .into_iter()
    .collect();

    let plan = ReconcilePlan::compute(&existing, desired);
    if plan.is_empty() {
        return Ok(());
    }

    for ch in &plan.to_add {
        sqlx::query(
            r#"
            INSERT INTO channels (owner_id, youtube_account_id, yt_channel_id, name, icon_url, email)
            VALUES ($1::uuid, $2::uuid, $3, $4, $5, $6)
            "#,
        )
        .bind(owner_id)
        .bind(&ch.youtube_account_id)
        .bind(&ch.id)
        .bind(&ch.name)
        .bind(&ch.icon_url)
        .bind(&ch.email)
        .execute(&mut *tx)
        .await?;
    }

    for yt_channel_id in &plan.to_remove {
        // Detaching a channel that projects still reference would orphan
        // those projects; reject the whole submission instead.
        let in_use: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM projects p
                JOIN channels c ON p.channel_id = c.id
                WHERE c.owner_id = $1::uuid AND c.yt_channel_id = $2)
            "#,
        )
        .bind(owner_id)
        .bind(yt_channel_id)
        .fetch_one(&mut *tx)
        .await?;
        if in_use {
            return Err(ChannelError::ChannelInUse(yt_channel_id.clone()));
        }

        sqlx::query("DELETE FROM channels WHERE owner_id = $1::uuid AND yt_channel_id = $2")
            .bind(owner_id)
            .bind(yt_channel_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        owner_id,
        added = plan.to_add.len(),
        removed = plan.to_remove.len(),
        "channel reconciliation committed"
    );
    Ok(())
}

/// Enumerate remote channels not yet attached for this user, merged across
/// every linked account.
///
/// A channel attached under one account is excluded even when another
/// account exposes it again. Accounts whose remote listing fails are
/// skipped rather than failing the whole listing.
pub async fn list_unattached(
    pool: &PgPool,
    google: &GoogleConfig,
    user_id: &str,
) -> Result<Vec<UnattachedChannel>, ChannelError> {
    let accounts = queries::list_accounts(pool, user_id).await?;
    let attached = queries::attached_channel_ids(pool, user_id).await?;

    let mut unattached = Vec::new();
    for account in &accounts {
        let channels = match youtube::channels::list_my_channels(google, &account.access_token)
            .await
        {
            Ok(channels) => channels,
            Err(e) => {
                warn!(account = %account.email, error = %e, "skipping account, channel listing failed");
                continue;
            }
        };
        for ch in channels {
            if attached.contains(&ch.id) {
                continue;
            }
            unattached.push(UnattachedChannel {
                id: ch.id,
                name: ch.name,
                icon_url: ch.icon_url,
                email: account.email.clone(),
                youtube_account_id: account.id.clone(),
            });
        }
    }
    Ok(unattached)
}
