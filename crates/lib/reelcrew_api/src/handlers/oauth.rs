//! OAuth redirect handlers — the HTTP face of the link flow.

use axum::extract::{Query, State};
use axum::response::Redirect;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::services::oauth;

/// Query parameters for the start redirect.
#[derive(serde::Deserialize)]
pub struct OAuthStartParams {
    pub state: Option<String>,
}

/// Query parameters for the provider callback.
#[derive(serde::Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// `GET /auth/start?state=<token>` — redirect to the provider consent screen.
pub async fn oauth_start_handler(
    State(state): State<AppState>,
    Query(params): Query<OAuthStartParams>,
) -> AppResult<Redirect> {
    let token = params.state.unwrap_or_default();
    let url = oauth::start_url(&state.config, &token)?;
    Ok(Redirect::temporary(&url))
}

/// `GET /auth/callback?code=..&state=..` — exchange the code, link the
/// account, and bounce back to the client with the discovered channels.
pub async fn oauth_callback_handler(
    State(state): State<AppState>,
    Query(params): Query<OAuthCallbackParams>,
) -> AppResult<Redirect> {
    let (code, token) = match (params.code, params.state) {
        (Some(code), Some(token)) if !code.is_empty() && !token.is_empty() => (code, token),
        _ => return Err(AppError::Validation("Code or state not found".into())),
    };

    let url = oauth::handle_callback(&state.pool, &state.config, &code, &token).await?;
    Ok(Redirect::temporary(&url))
}
