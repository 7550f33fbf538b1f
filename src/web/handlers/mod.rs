//! HTML template rendering handlers.

mod home;
mod login;
mod not_found;

pub use home::home_handler;
pub use login::{login_page_handler, login_submit_handler};
pub use not_found::not_found_handler;
