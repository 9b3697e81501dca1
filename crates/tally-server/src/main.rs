//! tally server
//!
//! - Counter API: /counters/{name} (POST create, GET read, PUT increment, DELETE)
//! - Ops: /healthz, /readyz, /metrics
//! - Graceful shutdown on Ctrl-C / SIGTERM (readyz reports draining for
//!   `server.drain_grace_ms` before the listener closes)

use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{app_state, config, router, shutdown};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_env().expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");
    let grace = Duration::from_millis(cfg.server.drain_grace_ms);

    let state = app_state::AppState::new(cfg).expect("app state init failed");
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::drain_on(state, shutdown::os_signal(), grace))
        .await
        .expect("server failed");

    tracing::info!("tally-server stopped");
}
