//! Channel attachment and reconciliation.
//!
//! Channels are the join point between a subject's dashboard and remote
//! YouTube channels. Reconciliation makes the persisted rows match a
//! desired set, transactionally; the unattached listing enumerates remote
//! channels not yet attached, across all linked accounts.

pub mod queries;
pub mod reconcile;

use thiserror::Error;

use crate::youtube::YouTubeError;

/// Errors from channel operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Detaching a channel that projects still reference is rejected.
    #[error("Channel {0} is referenced by existing projects")]
    ChannelInUse(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error(transparent)]
    YouTube(#[from] YouTubeError),
}

/// A remote channel not yet attached to the owner's dashboard.
#[derive(Debug, Clone)]
pub struct UnattachedChannel {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    /// External email of the account that exposed this channel.
    pub email: String,
    pub youtube_account_id: String,
}

/// A channel selected by the owner as part of the desired attached set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedChannel {
    /// Remote channel id — the de-duplication key.
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub email: String,
    pub youtube_account_id: String,
}
