use reqwest::StatusCode;

use crate::helpers::{PASSWORD, TestApp, assert_redirect};

async fn app_with_account(username: &str) -> TestApp {
    let app = TestApp::new().await;
    // Registration signs the first client in; a fresh client starts anonymous.
    assert_redirect(&app.register_with(&TestApp::client(), username).await, "/");
    app
}

#[tokio::test]
async fn should_return_200_for_login_page() {
    let app = TestApp::new().await;

    let response = app.get("/accounts/login?next=/accounts/profile").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("name=\"next\" value=\"/accounts/profile\""));
}

#[tokio::test]
async fn should_redirect_to_landing_without_next() {
    let app = app_with_account("alopez").await;

    let response = app.login("alopez", PASSWORD).await;
    assert_redirect(&response, "/");

    let landing = app.get("/").await.text().await.unwrap();
    assert!(landing.contains("Bienvenido alopez"));
}

#[tokio::test]
async fn should_redirect_to_next_from_query() {
    let app = app_with_account("alopez").await;

    let response = app
        .post_form(
            "/accounts/login?next=%2Faccounts%2Fprofile%2Fedit",
            &[("username", "alopez"), ("password", PASSWORD)],
        )
        .await;

    assert_redirect(&response, "/accounts/profile/edit");
}

#[tokio::test]
async fn should_prefer_next_from_form() {
    let app = app_with_account("alopez").await;

    let response = app
        .post_form(
            "/accounts/login?next=%2Faccounts%2Fdelete",
            &[
                ("username", "alopez"),
                ("password", PASSWORD),
                ("next", "/accounts/profile"),
            ],
        )
        .await;

    assert_redirect(&response, "/accounts/profile");
}

#[tokio::test]
async fn should_ignore_absolute_next() {
    let app = app_with_account("alopez").await;

    let response = app
        .post_form(
            "/accounts/login",
            &[
                ("username", "alopez"),
                ("password", PASSWORD),
                ("next", "https://evil.example.com/"),
            ],
        )
        .await;

    assert_redirect(&response, "/");
}

#[tokio::test]
async fn should_show_same_message_for_unknown_user_and_wrong_password() {
    let app = app_with_account("alopez").await;

    let wrong_password = app.login("alopez", "no-es-la-clave").await;
    assert_eq!(wrong_password.status(), StatusCode::OK);
    let wrong_password = wrong_password.text().await.unwrap();

    let unknown_user = app.login("nadie", PASSWORD).await;
    assert_eq!(unknown_user.status(), StatusCode::OK);
    let unknown_user = unknown_user.text().await.unwrap();

    assert!(wrong_password.contains("Usuario o contraseña incorrectos"));
    assert!(unknown_user.contains("Usuario o contraseña incorrectos"));

    let profile = app.get("/accounts/profile").await;
    assert_eq!(profile.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn should_keep_next_after_failed_attempt() {
    let app = app_with_account("alopez").await;

    let response = app
        .post_form(
            "/accounts/login?next=%2Faccounts%2Fprofile",
            &[("username", "alopez"), ("password", "no-es-la-clave")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("name=\"next\" value=\"/accounts/profile\""));
}
