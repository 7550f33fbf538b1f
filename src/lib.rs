//! # Login Demo
//!
//! A single-page login demo built with Axum and Askama.
//!
//! The service renders a login form, validates the submitted email and
//! password, and compares a valid submission against one hardcoded
//! credential pair. The response is either the form again (with inline
//! errors), a success page, or a denied page. Nothing is stored and no
//! session is issued.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Credential types and the demo account
//! - **Application Layer** ([`application`]) - Credential comparison
//! - **Web Layer** ([`web`]) - Forms, CSRF tokens, handlers and routes
//!
//! ## Quick Start
//!
//! ```bash
//! export SECRET_KEY="$(cargo run --bin admin -- secret)"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LoginService;
    pub use crate::domain::{CredentialPair, Credentials, LoginOutcome};
    pub use crate::error::{AppError, CsrfError};
    pub use crate::state::AppState;
    pub use crate::web::csrf::CsrfProtection;
    pub use crate::web::forms::{FormErrors, LoginForm};
}
