//! HTTP server initialization and runtime setup.

use crate::application::services::LoginService;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::csrf::CsrfProtection;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the CSRF key cannot be initialized.
pub fn build_state(config: &Config) -> Result<AppState> {
    let mut csrf = CsrfProtection::new(&config.secret_key, config.csrf_time_limit)
        .context("Failed to initialize CSRF protection")?;
    if !config.csrf_enabled {
        csrf = csrf.disabled();
    }

    Ok(AppState::new(
        Arc::new(LoginService::default()),
        Arc::new(csrf),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Stops on Ctrl-C.
///
/// # Errors
///
/// Returns an error if:
/// - State initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
