//! searchpulse core: the search frequency tracker and the shared error surface.
//!
//! This crate carries no transport or runtime dependencies. The HTTP layer,
//! metrics and tracing live in `searchpulse-server` and call into the types
//! defined here.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; every fallible path
//! surfaces as `SearchPulseError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod tracker;

/// Shared result type.
pub use error::{Result, SearchPulseError};
pub use tracker::{SearchFrequencyTracker, TermCount, UNKNOWN_TERM};
