//! Observability: in-process Prometheus metrics, the request tracking
//! middleware, and tracing subscriber setup.

pub mod logging;
pub mod metrics;
pub mod middleware;
