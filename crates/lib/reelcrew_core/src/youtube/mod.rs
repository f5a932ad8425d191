//! Google OAuth and YouTube Data API client.
//!
//! All endpoint URLs are configuration, so deployments and tests can point
//! them anywhere. Calls are bounded by [`UPSTREAM_TIMEOUT`]; a timeout is
//! reported the same way as any other upstream failure.

pub mod channels;
pub mod oauth;

use std::time::Duration;

use thiserror::Error;

/// Per-request timeout for calls to Google endpoints.
pub(crate) const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from calls to Google endpoints.
#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream response parse error: {0}")]
    Parse(String),
}

/// Endpoint and credential configuration for the Google OAuth client.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Our callback URL, registered with the provider.
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub channels_url: String,
}

impl GoogleConfig {
    /// Reads credentials from `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` /
    /// `GOOGLE_REDIRECT_URL`; endpoint URLs default to Google's.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            redirect_url: std::env::var("GOOGLE_REDIRECT_URL").unwrap_or_default(),
            auth_url: "https://accounts.google.com/o/oauth2/auth".into(),
            token_url: "https://oauth2.googleapis.com/token".into(),
            userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".into(),
            channels_url: "https://www.googleapis.com/youtube/v3/channels".into(),
        }
    }
}
