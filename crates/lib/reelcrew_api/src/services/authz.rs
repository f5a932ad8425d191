//! Authorization checks — the single authority for role and participant
//! gating. Every mutating handler goes through these, never through ad-hoc
//! role-string comparisons.

use reelcrew_core::models::auth::{Role, SessionClaims};
use reelcrew_core::projects::ProjectRow;

use crate::error::AppError;

/// Require the caller's role claim to equal `expected`, returning the
/// caller's user id.
///
/// Decides on the signed claim alone; role is never re-read from storage
/// while the token is valid.
pub fn require_role(claims: &SessionClaims, expected: Role) -> Result<&str, AppError> {
    if claims.role == expected {
        Ok(&claims.sub)
    } else {
        Err(AppError::Forbidden(format!("Requires {expected} role")))
    }
}

/// Require the caller to be the project's owner or editor. Exact id match,
/// no hierarchy.
pub fn require_participant(project: &ProjectRow, user_id: &str) -> Result<(), AppError> {
    if project.owner_id == user_id || project.editor_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden("Not a participant in this project".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims(role: Role) -> SessionClaims {
        SessionClaims {
            sub: "u1".into(),
            email: "u1@example.com".into(),
            name: "U One".into(),
            role,
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
        }
    }

    fn project(owner_id: &str, editor_id: &str) -> ProjectRow {
        ProjectRow {
            id: "p1".into(),
            title: "t".into(),
            description: String::new(),
            video_path: "/v.mp4".into(),
            status: "pending".into(),
            editor_id: editor_id.into(),
            owner_id: owner_id.into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn matching_role_returns_subject_id() {
        let c = claims(Role::Owner);
        assert_eq!(require_role(&c, Role::Owner).unwrap(), "u1");
    }

    #[test]
    fn mismatched_role_is_forbidden() {
        let c = claims(Role::Editor);
        assert!(matches!(
            require_role(&c, Role::Owner),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn owner_and_editor_are_participants() {
        let p = project("o1", "e1");
        assert!(require_participant(&p, "o1").is_ok());
        assert!(require_participant(&p, "e1").is_ok());
        assert!(matches!(
            require_participant(&p, "someone-else"),
            Err(AppError::Forbidden(_))
        ));
    }
}
