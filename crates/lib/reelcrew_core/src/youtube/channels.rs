//! Channel listing via the YouTube Data API.

use serde::Deserialize;

use super::{GoogleConfig, UPSTREAM_TIMEOUT, YouTubeError};

/// One channel as reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteChannel {
    /// The remote system's immutable channel identifier.
    pub id: String,
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    id: String,
    snippet: ChannelSnippet,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// List the channels owned by the authorized account (`mine=true`).
pub async fn list_my_channels(
    cfg: &GoogleConfig,
    access_token: &str,
) -> Result<Vec<RemoteChannel>, YouTubeError> {
    let client = reqwest::Client::new();

    let resp = client
        .get(&cfg.channels_url)
        .query(&[("part", "snippet"), ("mine", "true")])
        .bearer_auth(access_token)
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|e| YouTubeError::Upstream(format!("channel listing failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(YouTubeError::Upstream(format!(
            "channel listing HTTP {status}: {body}"
        )));
    }

    let listed = resp
        .json::<ChannelListResponse>()
        .await
        .map_err(|e| YouTubeError::Parse(format!("channel list response: {e}")))?;

    Ok(listed
        .items
        .into_iter()
        .map(|item| RemoteChannel {
            id: item.id,
            name: item.snippet.title,
            icon_url: item
                .snippet
                .thumbnails
                .default
                .map(|t| t.url)
                .unwrap_or_default(),
        })
        .collect())
}
