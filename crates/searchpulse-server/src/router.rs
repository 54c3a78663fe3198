//! Axum router wiring.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::obs::middleware::{track_requests, ServiceSpan};
use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let span = ServiceSpan::new(&state.cfg().server.service_name);

    Router::new()
        .route("/", get(api::home))
        .route("/search", get(api::search))
        .route("/top-searches", get(api::top_searches))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(TraceLayer::new_for_http().make_span_with(span))
        .with_state(state)
}
