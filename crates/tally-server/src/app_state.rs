//! Shared application state for the tally server.
//!
//! The counter store is injected here rather than living in a global, so
//! tests and alternative backends can supply their own `CounterStore`.

use std::sync::Arc;

use tally_core::error::{Result, TallyError};
use tally_core::{CounterStore, InMemoryCounterStore};

use crate::config::TallyConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn CounterStore>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: TallyConfig,
}

impl AppState {
    /// Build state with the default in-memory store.
    pub fn new(cfg: TallyConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(InMemoryCounterStore::new()))
    }

    /// Build state around a caller-provided store.
    pub fn with_store(cfg: TallyConfig, store: Arc<dyn CounterStore>) -> Result<Self> {
        cfg.validate()?;
        if !store.is_empty() {
            tracing::info!(counters = store.len(), "starting with a pre-populated store");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            store,
            metrics: Arc::new(ServerMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.store.as_ref()
    }

    pub fn metrics(&self) -> Arc<ServerMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    /// Gauges computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("tally_counters_live", self.store.len() as u64)]
    }

    /// Reject names the server will not store.
    pub fn check_name(&self, name: &str) -> Result<()> {
        // The router never yields an empty segment; this guards direct callers.
        if name.is_empty() {
            return Err(TallyError::BadRequest("counter name must not be empty".into()));
        }
        let max = self.inner.cfg.limits.max_name_bytes;
        if name.len() > max {
            return Err(TallyError::BadRequest(format!(
                "counter name exceeds {max} bytes"
            )));
        }
        Ok(())
    }
}
