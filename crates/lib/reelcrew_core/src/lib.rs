//! # reelcrew_core
//!
//! Core domain logic for Reelcrew: session credentials, channel
//! reconciliation, project persistence, and the Google OAuth client.

pub mod auth;
pub mod channels;
pub mod migrate;
pub mod models;
pub mod projects;
pub mod sidebar;
pub mod uuid;
pub mod youtube;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
