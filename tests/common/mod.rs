#![allow(dead_code)]

use axum_test::TestServer;
use login_demo::application::services::LoginService;
use login_demo::routes::router;
use login_demo::state::AppState;
use login_demo::web::csrf::CsrfProtection;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEMO_EMAIL: &str = "rick0142@gmail.com";
pub const DEMO_PASSWORD: &str = "L6h3d4drae";

pub fn create_test_state(csrf_enabled: bool) -> AppState {
    let mut csrf = CsrfProtection::new("test-secret-key", 3600).unwrap();
    if !csrf_enabled {
        csrf = csrf.disabled();
    }

    AppState::new(Arc::new(LoginService::default()), Arc::new(csrf))
}

pub fn test_server(state: AppState) -> TestServer {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    TestServer::new(router(state, static_dir)).unwrap()
}

/// Pulls the hidden CSRF token out of a rendered login page.
pub fn extract_csrf_token(html: &str) -> String {
    let marker = r#"name="csrf_token" value=""#;
    let start = html.find(marker).expect("login page has a csrf_token input") + marker.len();
    let end = html[start..].find('"').unwrap() + start;
    html[start..end].to_string()
}

/// Fetches the login page and returns a token it issued.
pub async fn fetch_csrf_token(server: &TestServer) -> String {
    let page = server.get("/login").await;
    extract_csrf_token(&page.text())
}

pub fn is_login_page(html: &str) -> bool {
    html.contains("<title>Login</title>")
}

pub fn is_success_page(html: &str) -> bool {
    html.contains("<title>Success</title>")
}

pub fn is_denied_page(html: &str) -> bool {
    html.contains("<title>Access Denied</title>")
}
