//! searchpulse server binary.
//!
//! Usage: `searchpulse-server [config.yaml]` (default `searchpulse.yaml`).

use searchpulse_core::error::{Result, SearchPulseError};
use searchpulse_server::{app_state::AppState, config, obs, router};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "searchpulse.yaml".to_string());

    let cfg = config::load_from_file(&path)?;
    obs::logging::init_tracing(&cfg.logging)?;

    let state = AppState::new(cfg)?;
    let listen = state.listen();
    let app = router::build_router(state.clone());

    tracing::info!(
        %listen,
        service = %state.cfg().server.service_name,
        config = %path,
        "searchpulse starting"
    );
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SearchPulseError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| SearchPulseError::Internal(format!("server failed: {e}")))?;

    tracing::info!("searchpulse stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, draining in-flight requests");
}
