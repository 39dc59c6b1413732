//! Axum router wiring.
//!
//! `/metric` takes authenticated submissions; `/` and `/metrics` serve the
//! aggregated exposition document; `/healthz` and `/readyz` are operational.

use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/metrics", get(handlers::index))
        .route("/metric", post(handlers::submit))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .with_state(state)
}
