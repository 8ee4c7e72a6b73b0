//! nightboard server binary.
//!
//! Startup order: logging, config from environment, stats provider with the
//! process start instant, router, then serve until ctrl-c or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::{fmt, EnvFilter};

use nightboard_server::{app_state::AppState, config, router, sysstats::SystemStats};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = config::from_env().expect("config load failed");
    let listen: SocketAddr = cfg
        .listen
        .parse()
        .expect("listen must be a valid SocketAddr");

    let provider = Arc::new(SystemStats::new(Instant::now()));
    let state = AppState::new(cfg, provider);
    let app = router::build_router(state);

    tracing::info!(%listen, "nightboard starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
