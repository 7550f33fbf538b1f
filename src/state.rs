//! Shared handler state.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::web::csrf::CsrfProtection;

/// State injected into every handler.
///
/// Read-only after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
    pub csrf: Arc<CsrfProtection>,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>, csrf: Arc<CsrfProtection>) -> Self {
        Self {
            login_service,
            csrf,
        }
    }
}
