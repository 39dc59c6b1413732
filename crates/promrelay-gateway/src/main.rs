//! promrelay gateway binary.
//!
//! - POST /metric : authenticated metric-file submissions
//! - GET / and /metrics : fleet-wide aggregated exposition document
//! - Config: strict YAML, validated at load, reloaded on a schedule

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use promrelay_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = Arc::new(config::ConfigHandle::load("promrelay.yaml").expect("config load failed"));
    let listen: SocketAddr = cfg
        .snapshot()
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    config::spawn_autoreload(Arc::clone(&cfg));

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "promrelay-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
