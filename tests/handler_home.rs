mod common;

use axum::http::{HeaderValue, StatusCode, header::COOKIE};

#[tokio::test]
async fn test_home_page_renders() {
    let server = common::test_server(common::create_test_state(true));

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains(r#"href="/login""#));
}

#[tokio::test]
async fn test_home_page_ignores_query_and_cookies() {
    let server = common::test_server(common::create_test_state(true));

    let response = server
        .get("/")
        .add_query_param("email", common::DEMO_EMAIL)
        .add_header(COOKIE, HeaderValue::from_static("session=whatever"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("<title>Home</title>"));
}

#[tokio::test]
async fn test_static_stylesheet_served() {
    let server = common::test_server(common::create_test_state(true));

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
    assert!(response.text().contains(".error"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = common::test_server(common::create_test_state(true));

    let response = server.get("/admin").expect_failure().await;

    response.assert_status(StatusCode::NOT_FOUND);
}
