//! Graceful shutdown sequencing.
//!
//! axum stops accepting connections as soon as the shutdown future resolves,
//! so draining is flagged first and the future only completes after the grace
//! period. Load balancers polling `/readyz` see 503 during that window.

use std::future::Future;
use std::time::Duration;

use crate::app_state::AppState;

/// Wait for `signal`, mark the state draining, then hold for `grace`.
pub async fn drain_on<F>(state: AppState, signal: F, grace: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;

    state.set_draining();
    tracing::info!(grace_ms = grace.as_millis() as u64, "shutdown signal received, draining");

    tokio::time::sleep(grace).await;
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn os_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl-c handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
