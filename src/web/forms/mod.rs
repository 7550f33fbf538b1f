//! Form definitions and validation.

pub mod email_address;
pub mod login_form;

pub use login_form::{FormErrors, LoginForm};
