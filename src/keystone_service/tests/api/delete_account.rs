use reqwest::StatusCode;

use crate::helpers::{PASSWORD, TestApp, assert_redirect};

#[tokio::test]
async fn should_show_confirmation_page() {
    let app = TestApp::new().await;
    app.register("alopez").await;

    let response = app.get("/accounts/delete").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("<strong>alopez</strong>"));
    assert_eq!(app.accounts.len().await, 1);
}

#[tokio::test]
async fn should_delete_account_and_sign_out() {
    let app = TestApp::new().await;
    app.register("alopez").await;

    let response = app.post_form("/accounts/delete", &[]).await;
    assert_redirect(&response, "/");
    assert!(app.accounts.is_empty().await);

    let landing = app.get("/").await.text().await.unwrap();
    assert!(landing.contains("Tu cuenta fue eliminada correctamente."));

    let profile = app.get("/accounts/profile").await;
    assert_redirect(&profile, "/accounts/login?next=%2Faccounts%2Fprofile");

    let login = app.login("alopez", PASSWORD).await;
    assert_eq!(login.status(), StatusCode::OK);
    let body = login.text().await.unwrap();
    assert!(body.contains("Usuario o contraseña incorrectos"));
}

#[tokio::test]
async fn should_free_username_after_deletion() {
    let app = TestApp::new().await;
    app.register("alopez").await;
    app.post_form("/accounts/delete", &[]).await;

    let response = app.register_with(&TestApp::client(), "alopez").await;

    assert_redirect(&response, "/");
    assert_eq!(app.accounts.len().await, 1);
}

#[tokio::test]
async fn should_redirect_anonymous_user_to_login() {
    let app = TestApp::new().await;

    let response = app.post_form("/accounts/delete", &[]).await;

    assert_redirect(&response, "/accounts/login?next=%2Faccounts%2Fdelete");
    assert!(app.accounts.is_empty().await);
}
