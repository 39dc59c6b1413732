#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::http::{header, HeaderMap, HeaderValue};

use promrelay_gateway::auth;

fn headers(value: Option<&str>) -> HeaderMap {
    let mut h = HeaderMap::new();
    if let Some(v) = value {
        h.insert(header::AUTHORIZATION, HeaderValue::from_str(v).unwrap());
    }
    h
}

#[test]
fn matching_bearer_token_passes() {
    auth::require_bearer(&headers(Some("Bearer secret")), "secret").expect("must pass");
}

#[test]
fn missing_header_rejected() {
    let err = auth::require_bearer(&headers(None), "secret").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "AUTH_FAILED");
}

#[test]
fn wrong_scheme_rejected() {
    auth::require_bearer(&headers(Some("Basic secret")), "secret").expect_err("must fail");
}

#[test]
fn mismatched_token_rejected() {
    auth::require_bearer(&headers(Some("Bearer nope")), "secret").expect_err("must fail");
    // Prefix of the real token must not pass either.
    auth::require_bearer(&headers(Some("Bearer secre")), "secret").expect_err("must fail");
}
