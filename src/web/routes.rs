//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /login` - Empty login form
/// - `POST /login` - Login form submission
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/login", get(login_page_handler).post(login_submit_handler))
}
