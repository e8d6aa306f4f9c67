use reqwest::StatusCode;

use crate::helpers::{TestApp, assert_redirect};

#[tokio::test]
async fn should_show_confirmation_page_to_signed_in_user() {
    let app = TestApp::new().await;
    app.register("alopez").await;

    let response = app.get("/accounts/logout").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_end_session_on_post() {
    let app = TestApp::new().await;
    app.register("alopez").await;

    let response = app.post_form("/accounts/logout", &[]).await;
    assert_redirect(&response, "/");

    let landing = app.get("/").await.text().await.unwrap();
    assert!(landing.contains("Has cerrado sesión correctamente"));

    let profile = app.get("/accounts/profile").await;
    assert_redirect(&profile, "/accounts/login?next=%2Faccounts%2Fprofile");
}

#[tokio::test]
async fn should_redirect_anonymous_user_to_login() {
    let app = TestApp::new().await;

    let response = app.get("/accounts/logout").await;

    assert_redirect(&response, "/accounts/login?next=%2Faccounts%2Flogout");
}
