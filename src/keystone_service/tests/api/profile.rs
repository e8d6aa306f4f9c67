use reqwest::StatusCode;

use crate::helpers::{TestApp, assert_redirect};

#[tokio::test]
async fn should_redirect_anonymous_user_to_login_with_next() {
    let app = TestApp::new().await;

    let response = app.get("/accounts/profile").await;

    assert_redirect(&response, "/accounts/login?next=%2Faccounts%2Fprofile");
}

#[tokio::test]
async fn should_prefill_edit_form() {
    let app = TestApp::new().await;
    app.register("alopez").await;

    let response = app.get("/accounts/profile/edit").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("value=\"Ana\""));
    assert!(body.contains("value=\"ana@example.com\""));
}

#[tokio::test]
async fn should_update_only_the_signed_in_account() {
    let app = TestApp::new().await;
    let other_browser = TestApp::client();
    app.register("alopez").await;
    app.register_with(&other_browser, "bgarcia").await;

    let response = app
        .post_form(
            "/accounts/profile/edit",
            &[
                ("first_name", "Ana María"),
                ("last_name", "López Ruiz"),
                ("email", "ana.maria@example.com"),
            ],
        )
        .await;
    assert_redirect(&response, "/accounts/profile");

    let own = app.get("/accounts/profile").await.text().await.unwrap();
    assert!(own.contains("Perfil actualizado correctamente"));
    assert!(own.contains("Ana María"));
    assert!(own.contains("ana.maria@example.com"));

    let other = app
        .get_with(&other_browser, "/accounts/profile")
        .await
        .text()
        .await
        .unwrap();
    assert!(other.contains("bgarcia"));
    assert!(other.contains("ana@example.com"));
    assert!(!other.contains("Ana María"));
}

#[tokio::test]
async fn should_redisplay_edit_form_for_invalid_email() {
    let app = TestApp::new().await;
    app.register("alopez").await;

    let response = app
        .post_form(
            "/accounts/profile/edit",
            &[
                ("first_name", "Ana"),
                ("last_name", "López"),
                ("email", "no-es-un-correo"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("value=\"no-es-un-correo\""));

    let profile = app.get("/accounts/profile").await.text().await.unwrap();
    assert!(profile.contains("ana@example.com"));
}
