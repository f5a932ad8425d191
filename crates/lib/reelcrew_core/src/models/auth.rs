//! Authentication domain models.
//!
//! These are internal domain models; API-facing request/response shapes
//! (with their `#[serde(rename)]` conventions) live in `reelcrew_api`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Principal role. Fixed at signup; there is no role-change path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Editor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized role strings.
#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "editor" => Ok(Role::Editor),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Domain user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Claims embedded in session tokens.
///
/// The token is self-contained: validating it requires only the signature
/// and expiry check, never a server-side lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: String,
    /// User email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Principal role, parsed once at verification.
    pub role: Role,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("editor".parse::<Role>().unwrap(), Role::Editor);
        assert_eq!(Role::Owner.to_string(), "owner");
        assert_eq!(Role::Editor.to_string(), "editor");
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        // Roles are case-sensitive, matching the CHECK constraint.
        assert!("Owner".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Editor).unwrap();
        assert_eq!(json, "\"editor\"");
    }
}
