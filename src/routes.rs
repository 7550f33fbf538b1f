//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Home page
//! - `GET  /login`    - Login form
//! - `POST /login`    - Login submission
//! - `/static/*`      - Static assets
//! - anything else    - `404 Not Found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::tracing;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes and the tracing layer.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] with trailing-slash normalization, so `/login/` serves `/login`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
