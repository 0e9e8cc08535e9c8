// Composition root for the calendar bounded context.
//
// Responsibilities
// - Instantiate the in-memory repository and the event service.
// - Serve the HTTP router until a shutdown signal arrives.
// - Cancel in-flight work on shutdown and drain within the configured timeout.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::shell::config::Config;
use crate::shell::state::AppState;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let app = http::router(
        AppState::in_memory(shutdown.clone()),
        config.request_timeout(),
    );

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, environment = ?config.environment, "starting server");

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutdown signal received, stopping server");
        signal_token.cancel();
    });

    let graceful = shutdown.clone().cancelled_owned();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(graceful)
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task panicked")?.context("server error")?;
            return Ok(());
        }
        _ = shutdown.cancelled() => {}
    }

    drain(server, config.shutdown_timeout()).await
}

/// Waits for the server task to finish after shutdown has been requested.
/// Fails when in-flight requests are still running once `timeout` elapses.
async fn drain(server: JoinHandle<std::io::Result<()>>, timeout: Duration) -> anyhow::Result<()> {
    match tokio::time::timeout(timeout, server).await {
        Ok(joined) => {
            joined.context("server task panicked")?.context("server error")?;
            tracing::info!("server stopped gracefully");
            Ok(())
        }
        Err(_) => {
            tracing::error!(
                timeout_secs = timeout.as_secs_f64(),
                "in-flight requests did not drain in time"
            );
            anyhow::bail!("server did not shut down within {timeout:?}")
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
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
}
