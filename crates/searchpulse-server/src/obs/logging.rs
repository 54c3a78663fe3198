//! Tracing/logging initialization.

use searchpulse_core::error::{Result, SearchPulseError};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingSection};

/// Install the global subscriber. `RUST_LOG` overrides `logging.level`.
pub fn init_tracing(cfg: &LoggingSection) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&cfg.level).map_err(|e| {
            SearchPulseError::BadRequest(format!("logging.level is not a valid filter: {e}"))
        })?,
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = match cfg.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_span_events(FmtSpan::CLOSE);
            subscriber.with(fmt_layer).try_init()
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE);
            subscriber.with(fmt_layer).try_init()
        }
    };

    installed.map_err(|e| SearchPulseError::Internal(format!("tracing init failed: {e}")))
}
