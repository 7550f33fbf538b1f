//! Fallback for unrouted paths.

use axum::http::Uri;

use crate::error::AppError;

/// Answers any path without a route with `404 Not Found`.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
