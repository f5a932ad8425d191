//! API request/response models.
//!
//! Wire shapes follow the client's camelCase conventions where the original
//! frontend expects them (`iconUrl`, `remoteAccountId`); everything else is
//! snake_case.

use serde::{Deserialize, Serialize};

/// JSON error body returned by every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Generic success acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// "owner" or "editor"; immutable after signup.
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// One channel in the unattached listing or a reconcile submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "remoteAccountId")]
    pub remote_account_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnattachedChannelsResponse {
    pub channels: Vec<ChannelInfo>,
}

/// Full desired set of attached channels, as selected in the client.
#[derive(Debug, Deserialize)]
pub struct UpdateChannelsRequest {
    pub channels: Vec<ChannelInfo>,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub video_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_path: String,
    pub status: String,
    pub editor_id: String,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    /// Offset into the video, in seconds.
    pub timestamp: i32,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SidebarChannelInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "iconUrl")]
    pub icon_url: String,
    pub email: String,
    #[serde(rename = "remoteAccountId")]
    pub remote_account_id: String,
}

#[derive(Debug, Serialize)]
pub struct SidebarPartnerInfo {
    pub id: String,
    pub name: String,
}

/// Channels plus collaboration partners (owners for editors, editors for
/// owners).
#[derive(Debug, Serialize)]
pub struct SidebarResponse {
    pub channels: Vec<SidebarChannelInfo>,
    pub partners: Vec<SidebarPartnerInfo>,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "dbConnected")]
    pub db_connected: bool,
}
