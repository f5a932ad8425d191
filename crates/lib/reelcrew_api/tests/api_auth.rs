//! Integration tests — build the real router and drive it with
//! `tower::ServiceExt::oneshot`.
//!
//! The pool connects lazily and every asserted path is decided by the
//! credential service or role gate before any query runs, so these tests
//! need no database.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use reelcrew_api::config::ApiConfig;
use reelcrew_api::{AppState, router};
use reelcrew_core::auth::jwt::issue_session_token;
use reelcrew_core::models::auth::{Role, SessionClaims};
use reelcrew_core::youtube::GoogleConfig;
use tower::ServiceExt;

const JWT_SECRET: &str = "test-secret";

fn test_state() -> AppState {
    let database_url = "postgres://localhost:5432/reelcrew_test";
    let pool = sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy(database_url)
        .expect("lazy pool");

    AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: database_url.into(),
            jwt_secret: JWT_SECRET.into(),
            frontend_url: "http://localhost:5173".into(),
            google: GoogleConfig {
                client_id: "client-123".into(),
                client_secret: "shhh".into(),
                redirect_url: "http://localhost:8080/auth/callback".into(),
                auth_url: "https://accounts.google.com/o/oauth2/auth".into(),
                token_url: "https://oauth2.googleapis.com/token".into(),
                userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".into(),
                channels_url: "https://www.googleapis.com/youtube/v3/channels".into(),
            },
        },
    }
}

fn bearer(role: Role) -> String {
    let token = issue_session_token("u1", "u1@example.com", "U One", role, JWT_SECRET.as_bytes())
        .expect("issue token");
    format!("Bearer {token}")
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let app = router(test_state());

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn missing_bearer_token_is_unauthorized() {
    let app = router(test_state());

    let req = Request::builder()
        .uri("/channels/unattached")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_bearer_token_is_unauthorized() {
    let app = router(test_state());

    let req = Request::builder()
        .uri("/channels/unattached")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    // Hand-craft claims with exp well in the past; the signature is valid.
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "u1".into(),
        email: "u1@example.com".into(),
        name: "U One".into(),
        role: Role::Owner,
        exp: now - 7200,
        iat: now - 7200 - 72 * 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let app = router(test_state());
    let req = Request::builder()
        .uri("/channels/unattached")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn editor_cannot_approve_projects() {
    let app = router(test_state());

    let req = Request::builder()
        .method("POST")
        .uri("/projects/some-project-id/approve")
        .header(header::AUTHORIZATION, bearer(Role::Editor))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    // The role gate rejects before any project row is touched.
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn editor_cannot_add_notes() {
    let app = router(test_state());

    let req = Request::builder()
        .method("POST")
        .uri("/projects/some-project-id/notes")
        .header(header::AUTHORIZATION, bearer(Role::Editor))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"timestamp": 30, "content": "tighten the intro"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn oauth_start_requires_state() {
    let app = router(test_state());

    let req = Request::builder()
        .uri("/auth/start")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let app = router(test_state());
    let req = Request::builder()
        .uri("/auth/start?state=")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oauth_start_redirects_with_state_verbatim() {
    let app = router(test_state());

    let req = Request::builder()
        .uri("/auth/start?state=my.session.token")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(location.starts_with("https://accounts.google.com/o/oauth2/auth"));
    assert!(location.contains("state=my.session.token"));
    assert!(location.contains("client_id=client-123"));
}

#[tokio::test]
async fn oauth_callback_requires_code_and_state() {
    let app = router(test_state());

    let req = Request::builder()
        .uri("/auth/callback")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oauth_callback_rejects_unverifiable_state() {
    let app = router(test_state());

    // The state must verify as a session token before anything else runs.
    let req = Request::builder()
        .uri("/auth/callback?code=4/abc&state=forged-token")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
