//! Browser-facing layer.
//!
//! Server-rendered pages using Askama templates.
//!
//! # Modules
//!
//! - [`csrf`] - CSRF token issue and verification
//! - [`forms`] - Form definitions and field validation
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Page route configuration

pub mod csrf;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
