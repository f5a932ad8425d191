//! Session token generation and verification.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::info;

use super::AuthError;
use crate::models::auth::{Role, SessionClaims};

/// Session token lifetime: 72 hours.
///
/// Long enough to carry the OAuth redirect round-trip without server-side
/// session storage; issued tokens cannot be revoked before expiry.
const SESSION_TOKEN_EXPIRY_HOURS: i64 = 72;

/// Generate a signed session token (HS256, 72 h expiry).
pub fn issue_session_token(
    user_id: &str,
    email: &str,
    name: &str,
    role: Role,
    secret: &[u8],
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        exp: (now + Duration::hours(SESSION_TOKEN_EXPIRY_HOURS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify a session token, returning the claims on success.
///
/// A bad signature and an expired token both yield `InvalidToken`.
pub fn verify_session_token(token: &str, secret: &[u8]) -> Result<SessionClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<SessionClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

/// Resolve the JWT secret: env var `JWT_SECRET` → `AUTH_SECRET` → persisted file.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    if let Ok(secret) = std::env::var("AUTH_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = jwt_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new JWT secret");
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelcrew")
        .join("jwt-secret")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn issue_then_verify_round_trips_claims() {
        let token =
            issue_session_token("u1", "owner@example.com", "Ada", Role::Owner, SECRET).unwrap();
        let claims = verify_session_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "owner@example.com");
        assert_eq!(claims.name, "Ada");
        assert_eq!(claims.role, Role::Owner);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token =
            issue_session_token("u1", "e@example.com", "Ada", Role::Editor, SECRET).unwrap();
        assert!(verify_session_token(&token, b"other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Encode claims whose exp is well past the validation leeway.
        let now = Utc::now();
        let claims = SessionClaims {
            sub: "u1".into(),
            email: "e@example.com".into(),
            name: "Ada".into(),
            role: Role::Owner,
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(74)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(verify_session_token(&token, SECRET).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_session_token("not-a-jwt", SECRET).is_err());
        assert!(verify_session_token("", SECRET).is_err());
    }
}
