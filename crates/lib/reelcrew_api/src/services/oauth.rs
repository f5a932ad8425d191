//! OAuth bridge — carries the session identity through the third-party
//! consent redirect and back, with no server-side session storage.
//!
//! The `state` query parameter holds the caller's signed session token.
//! The callback verifies it to recover the subject id, exchanges the
//! single-use authorization code, persists the linked account, and hands
//! the discovered channel list back to the client as escaped redirect data.

use sqlx::PgPool;
use tracing::info;
use url::Url;

use reelcrew_core::auth::jwt::verify_session_token;
use reelcrew_core::channels::queries as channel_queries;
use reelcrew_core::youtube::channels::{RemoteChannel, list_my_channels};
use reelcrew_core::youtube::oauth::{authorization_url, exchange_authorization_code, fetch_user_email};

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// Build the provider consent URL for the start redirect.
///
/// The `state` token is not verified here; the callback is the
/// authentication boundary. It only has to be present.
pub fn start_url(config: &ApiConfig, state: &str) -> AppResult<String> {
    if state.is_empty() {
        return Err(AppError::Validation("Missing state".into()));
    }
    authorization_url(&config.google, state)
        .map_err(|e| AppError::Internal(format!("authorization url: {e}")))
}

/// Process the provider callback: verify `state`, exchange the code,
/// persist the linked account, and build the client success redirect.
///
/// Failures are terminal for the attempt — the authorization code is
/// single-use, so the client must restart from the consent redirect.
pub async fn handle_callback(
    pool: &PgPool,
    config: &ApiConfig,
    code: &str,
    state: &str,
) -> AppResult<String> {
    let claims = verify_session_token(state, config.jwt_secret.as_bytes())
        .map_err(|_| AppError::Unauthorized("Invalid token".into()))?;

    let tokens = exchange_authorization_code(&config.google, code).await?;
    let email = fetch_user_email(&config.google, &tokens.access_token).await?;

    channel_queries::upsert_account(
        pool,
        &claims.sub,
        &email,
        &tokens.access_token,
        tokens.refresh_token.as_deref().unwrap_or_default(),
    )
    .await?;

    let channels = list_my_channels(&config.google, &tokens.access_token).await?;

    info!(
        user_id = %claims.sub,
        account = %email,
        channels = channels.len(),
        "linked youtube account"
    );

    success_redirect_url(&config.frontend_url, &email, &claims.sub, &channels)
}

/// Build the client redirect carrying the linked email, subject id, and
/// discovered channels as URL-escaped JSON.
pub(crate) fn success_redirect_url(
    frontend_url: &str,
    email: &str,
    user_id: &str,
    channels: &[RemoteChannel],
) -> AppResult<String> {
    let payload: Vec<serde_json::Value> = channels
        .iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "name": c.name,
                "iconUrl": c.icon_url,
            })
        })
        .collect();
    let channels_json = serde_json::to_string(&payload)
        .map_err(|e| AppError::Internal(format!("channels payload: {e}")))?;

    let base = Url::parse(frontend_url)
        .map_err(|e| AppError::Internal(format!("frontend url: {e}")))?;
    let mut url = base
        .join("/oauth-callback")
        .map_err(|e| AppError::Internal(format!("frontend url: {e}")))?;
    url.query_pairs_mut()
        .append_pair("status", "success")
        .append_pair("email", email)
        .append_pair("user_id", user_id)
        .append_pair("channels", &channels_json);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_redirect_escapes_email_and_channels() {
        let channels = vec![RemoteChannel {
            id: "UC1".into(),
            name: "Cats & Dogs".into(),
            icon_url: "https://img/1.png".into(),
        }];
        let url =
            success_redirect_url("http://localhost:5173", "a+b@example.com", "u1", &channels)
                .unwrap();

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path(), "/oauth-callback");

        let get = |key: &str| {
            parsed
                .query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        };
        assert_eq!(get("status").as_deref(), Some("success"));
        assert_eq!(get("email").as_deref(), Some("a+b@example.com"));
        assert_eq!(get("user_id").as_deref(), Some("u1"));

        // The channels parameter decodes back to the JSON array.
        let decoded: Vec<serde_json::Value> =
            serde_json::from_str(&get("channels").unwrap()).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0]["id"], "UC1");
        assert_eq!(decoded[0]["name"], "Cats & Dogs");
        assert_eq!(decoded[0]["iconUrl"], "https://img/1.png");
    }

    #[test]
    fn success_redirect_with_no_channels_is_empty_array() {
        let url = success_redirect_url("http://localhost:5173", "a@b.c", "u1", &[]).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let channels = parsed
            .query_pairs()
            .find(|(k, _)| k == "channels")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(channels, "[]");
    }
}
