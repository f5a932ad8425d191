//! API server configuration.

use reelcrew_core::auth::jwt::resolve_jwt_secret;
use reelcrew_core::youtube::GoogleConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Client URL the OAuth callback redirects back to.
    pub frontend_url: String,
    /// Google OAuth credentials and endpoint URLs.
    pub google: GoogleConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                     | Default                                |
    /// |------------------------------|----------------------------------------|
    /// | `BIND_ADDR`                  | `127.0.0.1:8080`                       |
    /// | `DATABASE_URL`               | `postgres://localhost:5432/reelcrew`   |
    /// | `JWT_SECRET` / `AUTH_SECRET` | generated & persisted to file          |
    /// | `FRONTEND_URL`               | `http://localhost:5173`                |
    /// | `GOOGLE_CLIENT_ID` etc.      | empty (linking disabled until set)     |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/reelcrew".into()),
            jwt_secret: resolve_jwt_secret(),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            google: GoogleConfig::from_env(),
        }
    }
}
