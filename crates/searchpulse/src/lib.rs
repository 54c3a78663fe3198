//! Top-level facade crate for searchpulse.
//!
//! Re-exports the core tracker and the server library so users can depend on a single crate.

pub mod core {
    pub use searchpulse_core::*;
}

pub mod server {
    pub use searchpulse_server::*;
}
