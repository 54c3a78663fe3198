//! Per-request instrumentation.
//!
//! - `track_requests`: request counter + latency histogram keyed by the
//!   matched route.
//! - `ServiceSpan`: root span for `TraceLayer`, tagged with the configured
//!   service name.

use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    http,
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;
use tower_http::trace::MakeSpan;
use tracing::Span;

use crate::app_state::AppState;

const UNMATCHED: &str = "unmatched";

fn endpoint_of<B>(req: &http::Request<B>) -> &str {
    req.extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or(UNMATCHED)
}

pub async fn track_requests(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = endpoint_of(&req).to_owned();
    let started = Instant::now();

    let resp = next.run(req).await;

    let labels = [("endpoint", endpoint.as_str())];
    let metrics = app.metrics();
    metrics.http_requests.inc(&labels);
    metrics.request_duration.observe(&labels, started.elapsed());
    resp
}

#[derive(Debug, Clone)]
pub struct ServiceSpan {
    service: Arc<str>,
}

impl ServiceSpan {
    pub fn new(service: &str) -> Self {
        Self {
            service: Arc::from(service),
        }
    }
}

impl<B> MakeSpan<B> for ServiceSpan {
    fn make_span(&mut self, req: &http::Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            service = %self.service,
            method = %req.method(),
            uri = %req.uri(),
            endpoint = endpoint_of(req),
        )
    }
}
