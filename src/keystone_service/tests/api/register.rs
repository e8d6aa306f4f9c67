use reqwest::StatusCode;

use crate::helpers::{PASSWORD, TestApp, assert_redirect};

#[tokio::test]
async fn should_return_200_for_register_page() {
    let app = TestApp::new().await;

    let response = app.get("/accounts/register").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("name=\"password2\""));
}

#[tokio::test]
async fn should_create_account_sign_in_and_flash_once() {
    let app = TestApp::new().await;

    let response = app.register("alopez").await;
    assert_redirect(&response, "/");
    assert_eq!(app.accounts.len().await, 1);

    let landing = app.get("/").await.text().await.unwrap();
    assert!(landing.contains("Bienvenido alopez, tu cuenta fue creada correctamente."));
    assert!(landing.contains("Has iniciado sesión como <strong>alopez</strong>"));

    let landing_again = app.get("/").await.text().await.unwrap();
    assert!(!landing_again.contains("tu cuenta fue creada correctamente"));

    let profile = app.get("/accounts/profile").await;
    assert_eq!(profile.status(), StatusCode::OK);
    let body = profile.text().await.unwrap();
    assert!(body.contains("ana@example.com"));
    assert!(body.contains("López"));
}

#[tokio::test]
async fn should_reject_username_taken_ignoring_case() {
    let app = TestApp::new().await;
    assert_redirect(&app.register("alopez").await, "/");

    let other_browser = TestApp::client();
    let response = app.register_with(&other_browser, "ALopez").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Ya existe un usuario con este nombre."));
    assert_eq!(app.accounts.len().await, 1);

    let profile = app.get_with(&other_browser, "/accounts/profile").await;
    assert_eq!(profile.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn should_redisplay_form_when_passwords_differ() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/accounts/register",
            &[
                ("username", "alopez"),
                ("email", ""),
                ("first_name", ""),
                ("last_name", ""),
                ("password1", PASSWORD),
                ("password2", "otra-Clave-2024"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Los dos campos de contraseña no coinciden."));
    assert!(body.contains("value=\"alopez\""));
    assert!(!body.contains(PASSWORD));
    assert!(app.accounts.is_empty().await);
}

#[tokio::test]
async fn should_redisplay_form_for_weak_password() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/accounts/register",
            &[
                ("username", "alopez"),
                ("password1", "corta"),
                ("password2", "corta"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("La contraseña es demasiado corta."));
    assert!(app.accounts.is_empty().await);
}
