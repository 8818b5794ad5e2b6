//! Request handlers
//!
//! Each handler converts failures into the JSON error envelope through
//! `WebServerError`'s `IntoResponse` impl.

pub mod files;
pub mod generate;
pub mod health;

use axum::http::HeaderMap;

use crate::core::DEFAULT_SESSION;

/// Header carrying the caller's session id
pub const SESSION_HEADER: &str = "x-session-id";

/// Session id from the request headers, falling back to the default session
pub fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_SESSION)
        .to_string()
}
