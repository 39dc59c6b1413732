//! Bearer-token gate for the ingest path.
//!
//! The read path is unauthenticated; only submissions pass through here. The
//! comparison is constant time so the token cannot be probed byte by byte.

use axum::http::{header, HeaderMap};
use constant_time_eq::constant_time_eq;

use promrelay_core::error::{MetricsError, Result};

/// Check the `Authorization: Bearer <token>` header against the configured
/// secret. Missing header, wrong scheme, and mismatch are indistinguishable
/// to the caller.
pub fn require_bearer(headers: &HeaderMap, expected: &str) -> Result<()> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").ok_or(MetricsError::AuthFailed)?;

    if !constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        return Err(MetricsError::AuthFailed);
    }
    Ok(())
}
