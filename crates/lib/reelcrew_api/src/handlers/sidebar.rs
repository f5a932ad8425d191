//! Sidebar request handler.

use axum::Json;
use axum::extract::State;

use reelcrew_core::sidebar;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{SidebarChannelInfo, SidebarPartnerInfo, SidebarResponse};

/// `GET /sidebar` — channels plus collaboration partners for the caller.
pub async fn sidebar_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<SidebarResponse>> {
    let (channels, partners) =
        sidebar::sidebar_data(&state.pool, &user.0.sub, user.0.role).await?;

    Ok(Json(SidebarResponse {
        channels: channels
            .into_iter()
            .map(|c| SidebarChannelInfo {
                id: c.id,
                name: c.name,
                icon_url: c.icon_url,
                email: c.email,
                remote_account_id: c.youtube_account_id,
            })
            .collect(),
        partners: partners
            .into_iter()
            .map(|p| SidebarPartnerInfo {
                id: p.id,
                name: p.name,
            })
            .collect(),
    }))
}
