//! Channel attachment request handlers.

use axum::Json;
use axum::extract::State;

use reelcrew_core::channels::{SelectedChannel, reconcile};

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{
    ChannelInfo, MessageResponse, UnattachedChannelsResponse, UpdateChannelsRequest,
};

/// `GET /channels/unattached` — remote channels not yet on the dashboard,
/// across every linked account.
pub async fn unattached_channels_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<UnattachedChannelsResponse>> {
    let found =
        reconcile::list_unattached(&state.pool, &state.config.google, &user.0.sub).await?;
    let channels = found
        .into_iter()
        .map(|c| ChannelInfo {
            id: c.id,
            name: c.name,
            icon_url: c.icon_url,
            email: c.email,
            remote_account_id: c.youtube_account_id,
        })
        .collect();
    Ok(Json(UnattachedChannelsResponse { channels }))
}

/// `POST /channels` — replace the attached channel set with the submitted
/// one (insert the new, detach the dropped, atomically).
pub async fn update_channels_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<UpdateChannelsRequest>,
) -> AppResult<Json<MessageResponse>> {
    let desired: Vec<SelectedChannel> = body
        .channels
        .into_iter()
        .map(|c| SelectedChannel {
            id: c.id,
            name: c.name,
            icon_url: c.icon_url,
            email: c.email,
            youtube_account_id: c.remote_account_id,
        })
        .collect();

    reconcile::reconcile(&state.pool, &user.0.sub, &desired).await?;

    Ok(Json(MessageResponse {
        message: "Channels updated successfully".into(),
    }))
}
