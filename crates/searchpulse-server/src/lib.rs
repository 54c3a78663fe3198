//! searchpulse server library entry.
//!
//! Wires config, shared state, the storefront endpoints, operational
//! endpoints, and observability into one axum stack. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
