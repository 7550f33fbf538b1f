//! Error types shared across the crate.
//!
//! Form validation and credential mismatches are not errors at this level:
//! both are rendered as ordinary pages with `200 OK`. What remains here are
//! CSRF verification failures (attached to the form) and framework-level
//! failures that map to an HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Reasons a submitted CSRF token is rejected.
///
/// The `Display` output is shown to the user next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,
    #[error("The CSRF token is invalid.")]
    Invalid,
    #[error("The CSRF token has expired.")]
    Expired,
}

/// Application errors that end a request with a non-200 status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("no page at {0}")]
    NotFound(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(path) => {
                tracing::debug!(%path, "No route matched");
                (StatusCode::NOT_FOUND, "404 Not Found").into_response()
            }
            AppError::Config(message) => {
                tracing::error!(%message, "Configuration error while serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_error_messages() {
        assert_eq!(CsrfError::Missing.to_string(), "The CSRF token is missing.");
        assert_eq!(CsrfError::Invalid.to_string(), "The CSRF token is invalid.");
        assert_eq!(CsrfError::Expired.to_string(), "The CSRF token has expired.");
    }

    #[test]
    fn test_app_error_status_codes() {
        let response = AppError::not_found("/nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::config("empty key").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
