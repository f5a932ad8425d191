//! Business-logic services behind the request handlers.

pub mod auth;
pub mod authz;
pub mod oauth;
