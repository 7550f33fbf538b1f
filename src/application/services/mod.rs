//! Business services used by the web handlers.

pub mod login_service;

pub use login_service::LoginService;
