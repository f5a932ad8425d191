//! Authorization-code flow against the Google OAuth endpoints.

use serde::Deserialize;
use url::Url;

use super::{GoogleConfig, UPSTREAM_TIMEOUT, YouTubeError};

/// OAuth scopes requested when linking an account.
const OAUTH_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/youtube.upload",
    "https://www.googleapis.com/auth/youtube",
    "https://www.googleapis.com/auth/userinfo.email",
];

/// Build the provider authorization URL for the consent redirect.
///
/// `state` is copied through verbatim; the callback recovers the session
/// identity from it.
pub fn authorization_url(cfg: &GoogleConfig, state: &str) -> Result<String, YouTubeError> {
    let mut url =
        Url::parse(&cfg.auth_url).map_err(|e| YouTubeError::Parse(format!("auth url: {e}")))?;
    url.query_pairs_mut()
        .append_pair("client_id", &cfg.client_id)
        .append_pair("redirect_uri", &cfg.redirect_url)
        .append_pair("response_type", "code")
        .append_pair("scope", &OAUTH_SCOPES.join(" "))
        .append_pair("access_type", "offline")
        .append_pair("prompt", "consent")
        .append_pair("state", state);
    Ok(url.into())
}

/// Response from the provider token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenExchangeResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    /// Absent when the provider decides consent was already granted.
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
}

/// Exchange an authorization code for access/refresh tokens.
///
/// The code is single-use; on failure the caller must restart the link
/// flow from the consent redirect.
pub async fn exchange_authorization_code(
    cfg: &GoogleConfig,
    code: &str,
) -> Result<TokenExchangeResponse, YouTubeError> {
    let client = reqwest::Client::new();

    let params = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("client_id", cfg.client_id.as_str()),
        ("client_secret", cfg.client_secret.as_str()),
        ("redirect_uri", cfg.redirect_url.as_str()),
    ];

    let resp = client
        .post(&cfg.token_url)
        .timeout(UPSTREAM_TIMEOUT)
        .form(&params)
        .send()
        .await
        .map_err(|e| YouTubeError::Upstream(format!("token exchange failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(YouTubeError::Upstream(format!(
            "token exchange HTTP {status}: {body}"
        )));
    }

    resp.json::<TokenExchangeResponse>()
        .await
        .map_err(|e| YouTubeError::Parse(format!("token response: {e}")))
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    email: String,
}

/// Fetch the authorized account's email from the userinfo endpoint.
pub async fn fetch_user_email(
    cfg: &GoogleConfig,
    access_token: &str,
) -> Result<String, YouTubeError> {
    let client = reqwest::Client::new();

    let resp = client
        .get(&cfg.userinfo_url)
        .bearer_auth(access_token)
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|e| YouTubeError::Upstream(format!("userinfo fetch failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(YouTubeError::Upstream(format!(
            "userinfo HTTP {status}: {body}"
        )));
    }

    resp.json::<UserInfoResponse>()
        .await
        .map(|u| u.email)
        .map_err(|e| YouTubeError::Parse(format!("userinfo response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GoogleConfig {
        GoogleConfig {
            client_id: "client-123".into(),
            client_secret: "shhh".into(),
            redirect_url: "http://localhost:8080/auth/callback".into(),
            auth_url: "https://accounts.google.com/o/oauth2/auth".into(),
            token_url: "https://oauth2.googleapis.com/token".into(),
            userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".into(),
            channels_url: "https://www.googleapis.com/youtube/v3/channels".into(),
        }
    }

    #[test]
    fn authorization_url_carries_state_verbatim() {
        let url = authorization_url(&test_config(), "some.jwt.token").unwrap();
        let parsed = Url::parse(&url).unwrap();
        let state = parsed
            .query_pairs()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(state, "some.jwt.token");
    }

    #[test]
    fn authorization_url_requests_offline_consent() {
        let url = authorization_url(&test_config(), "s").unwrap();
        let parsed = Url::parse(&url).unwrap();
        let get = |key: &str| {
            parsed
                .query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        };
        assert_eq!(get("client_id").as_deref(), Some("client-123"));
        assert_eq!(get("response_type").as_deref(), Some("code"));
        assert_eq!(get("access_type").as_deref(), Some("offline"));
        assert_eq!(get("prompt").as_deref(), Some("consent"));
        let scope = get("scope").unwrap();
        assert!(scope.contains("youtube.upload"));
        assert!(scope.contains("userinfo.email"));
    }

    #[test]
    fn authorization_url_escapes_redirect_uri() {
        let url = authorization_url(&test_config(), "s").unwrap();
        // The raw query must not contain an unescaped nested URL.
        let query = Url::parse(&url).unwrap().query().unwrap().to_string();
        assert!(query.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fcallback"));
    }
}
