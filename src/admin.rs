//! Admin Gate
//!
//! A trivial shared-secret check guarding the mutating endpoints (song list
//! save, blog editing, layout save). Clients send the secret in the
//! `x-admin-token` header. When no token is configured the gate stays closed.

use crate::config::Config;
use axum::http::HeaderMap;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

pub fn is_authorized(config: &Config, headers: &HeaderMap) -> bool {
    let Some(expected) = config.admin_token.as_deref() else {
        return false;
    };
    headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|token| token == expected)
        .unwrap_or(false)
}
