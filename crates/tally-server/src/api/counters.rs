//! `/counters/{name}` handlers.
//!
//! Every success body is a single-entry JSON object `{name: value}`.
//! Errors go through `ApiError` and carry `{"Message": ...}`.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::app_state::AppState;
use crate::error::ApiError;
use tally_core::TallyError;

type ApiResult = std::result::Result<Response, ApiError>;

fn counter_body(name: &str, value: u64) -> Json<Value> {
    let mut m = Map::new();
    m.insert(name.to_string(), Value::from(value));
    Json(Value::Object(m))
}

/// Turn a handler outcome into a response and record it.
fn finish(state: &AppState, op: &'static str, started: Instant, res: ApiResult) -> Response {
    let resp = match res {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(op, code = e.0.client_code().as_str(), error = %e.0, "counter request rejected");
            e.into_response()
        }
    };
    state
        .metrics()
        .record(op, resp.status().as_u16(), started.elapsed());
    resp
}

fn do_create(state: &AppState, name: &str) -> ApiResult {
    state.check_name(name)?;
    let value = state.store().create(name)?;
    tracing::info!(counter = %name, "counter created");
    Ok((StatusCode::CREATED, counter_body(name, value)).into_response())
}

fn do_read(state: &AppState, name: &str) -> ApiResult {
    state.check_name(name)?;
    let value = state
        .store()
        .get(name)
        .ok_or_else(|| TallyError::NotFound(name.to_string()))?;
    tracing::debug!(counter = %name, value, "counter read");
    Ok((StatusCode::OK, counter_body(name, value)).into_response())
}

fn do_update(state: &AppState, name: &str) -> ApiResult {
    state.check_name(name)?;
    let value = state.store().increment(name)?;
    tracing::debug!(counter = %name, value, "counter incremented");
    Ok((StatusCode::OK, counter_body(name, value)).into_response())
}

/// Idempotent: an absent name is still 204.
fn do_delete(state: &AppState, name: &str) -> ApiResult {
    state.check_name(name)?;
    if state.store().remove(name) {
        tracing::info!(counter = %name, "counter deleted");
    } else {
        tracing::debug!(counter = %name, "delete of absent counter");
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn create_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = do_create(&state, &name);
    finish(&state, "create", started, res)
}

pub async fn read_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = do_read(&state, &name);
    finish(&state, "read", started, res)
}

pub async fn update_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = do_update(&state, &name);
    finish(&state, "update", started, res)
}

pub async fn delete_counter(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let started = Instant::now();
    let res = do_delete(&state, &name);
    finish(&state, "delete", started, res)
}
