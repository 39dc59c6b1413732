//! HTTP handlers for the ingest and read paths.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use promrelay_core::error::{ClientCode, MetricsError};

use crate::{aggregate, app_state::AppState, auth, ingest};

/// Prometheus text exposition content type.
const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::DecodeFailed | ClientCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ClientCode::AuthFailed => StatusCode::UNAUTHORIZED,
        ClientCode::StoreFailed | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: MetricsError) -> Response {
    let code = err.client_code();
    (
        status_for(code),
        Json(json!({ "error": code.as_str(), "message": err.to_string() })),
    )
        .into_response()
}

/// `POST /metric` — ingest one metric file. Auth gate first, body untouched
/// until the token checks out.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let cfg = state.config();
    if let Err(e) = auth::require_bearer(&headers, &cfg.auth.token) {
        tracing::warn!("submission rejected: bad bearer token");
        return error_response(e);
    }

    let base64_encoded = headers
        .get("content-transfer-encoding")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("base64"));

    let result = async {
        let raw = ingest::decode_submission(&body, base64_encoded)?;
        ingest::ingest(state.store(), &raw).await
    }
    .await;

    match result {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "submission failed");
            error_response(e)
        }
    }
}

/// `GET /` and `GET /metrics` — aggregate every stored file and serve the
/// exposition text.
pub async fn index(State(state): State<AppState>) -> Response {
    match aggregate::aggregate_all(state.store()).await {
        Ok(all) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
            all.render(),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "aggregation failed");
            // Read-path failures are server-side: a corrupt stored object is
            // not the scraper's fault, so decode/validation errors found
            // during aggregation do not map to 4xx here.
            let code = e.client_code();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": code.as_str(), "message": e.to_string() })),
            )
                .into_response()
        }
    }
}
