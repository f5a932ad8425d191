//! # reelcrew_api
//!
//! HTTP API library for Reelcrew.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, channels, health, oauth, projects, sidebar};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `reelcrew_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    reelcrew_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required). The OAuth redirects stay public:
    // the callback authenticates via the state token itself.
    let public = Router::new()
        .route("/health", get(health::health_handler))
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/start", get(oauth::oauth_start_handler))
        .route("/auth/callback", get(oauth::oauth_callback_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route(
            "/channels/unattached",
            get(channels::unattached_channels_handler),
        )
        .route("/channels", post(channels::update_channels_handler))
        .route("/projects", post(projects::create_project_handler))
        .route("/projects", get(projects::list_projects_handler))
        .route("/projects/{id}", get(projects::get_project_handler))
        .route("/projects/{id}/notes", post(projects::add_note_handler))
        .route(
            "/projects/{id}/approve",
            post(projects::approve_project_handler),
        )
        .route(
            "/projects/{id}/reject",
            post(projects::reject_project_handler),
        )
        .route("/sidebar", get(sidebar::sidebar_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
