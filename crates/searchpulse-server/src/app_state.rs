//! Shared application state for the search service.
//!
//! Owns the validated config, the search frequency tracker, and the metrics
//! registry. Cloned into every handler through axum `State`.

use std::net::SocketAddr;
use std::sync::Arc;

use searchpulse_core::error::Result;
use searchpulse_core::SearchFrequencyTracker;

use crate::config::ServerConfig;
use crate::obs::metrics::{GaugeSample, ServerMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    tracker: Arc<SearchFrequencyTracker>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    listen: SocketAddr,
}

impl AppState {
    /// Build application state from a config. Returns Result so main can
    /// report a bad listen address instead of panicking.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        let listen = cfg.server.listen_addr()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, listen }),
            tracker: Arc::new(SearchFrequencyTracker::new()),
            metrics: Arc::new(ServerMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn listen(&self) -> SocketAddr {
        self.inner.listen
    }

    pub fn tracker(&self) -> &SearchFrequencyTracker {
        &self.tracker
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    /// Gauges computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<GaugeSample<'static>> {
        vec![GaugeSample {
            name: "searchpulse_tracked_terms",
            help: "Distinct search terms recorded since start",
            value: self.tracker.len() as u64,
        }]
    }
}
