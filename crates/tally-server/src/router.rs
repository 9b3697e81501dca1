//! Axum router wiring.
//!
//! `/counters/:name` carries all four counter operations; ops endpoints sit
//! alongside. A request without a name segment never matches a counter route.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/counters/:name",
            get(api::read_counter)
                .post(api::create_counter)
                .put(api::update_counter)
                .delete(api::delete_counter),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
