use std::time::Duration;

use axum_extra::extract::cookie::Key;
use keystone_adapters::{
    HashMapAccountStore, HashMapSessionStore,
    config::{self, CookieSettings},
};
use keystone_axum::AppState;
use keystone_core::PasswordPolicy;
use keystone_service::AccountsService;
use reqwest::{Response, StatusCode, header::LOCATION, redirect::Policy};

pub const PASSWORD: &str = "marea-Alta-2024";

pub struct TestApp {
    pub address: String,
    pub accounts: HashMapAccountStore,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let accounts = HashMapAccountStore::new();
        let sessions = HashMapSessionStore::new(Duration::from_secs(300));

        let state = AppState::new(
            accounts.clone(),
            sessions,
            Key::generate(),
            CookieSettings::default(),
            PasswordPolicy::default(),
        );
        let service = AccountsService::new(state, "assets");

        let listener = tokio::net::TcpListener::bind(config::test::APP_ADDRESS)
            .await
            .expect("Failed to bind a local port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener));

        let http_client = Self::client();

        Self {
            address,
            accounts,
            http_client,
        }
    }

    /// A client with its own cookie jar, i.e. a second browser.
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap()
    }

    pub async fn get(&self, path: &str) -> Response {
        self.get_with(&self.http_client, path).await
    }

    pub async fn get_with(&self, client: &reqwest::Client, path: &str) -> Response {
        client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, path: &str, body: &[(&str, &str)]) -> Response {
        self.post_form_with(&self.http_client, path, body).await
    }

    pub async fn post_form_with(
        &self,
        client: &reqwest::Client,
        path: &str,
        body: &[(&str, &str)],
    ) -> Response {
        client
            .post(format!("{}{}", &self.address, path))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn register(&self, username: &str) -> Response {
        self.register_with(&self.http_client, username).await
    }

    pub async fn register_with(&self, client: &reqwest::Client, username: &str) -> Response {
        self.post_form_with(
            client,
            "/accounts/register",
            &[
                ("username", username),
                ("email", "ana@example.com"),
                ("first_name", "Ana"),
                ("last_name", "López"),
                ("password1", PASSWORD),
                ("password2", PASSWORD),
            ],
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Response {
        self.post_form(
            "/accounts/login",
            &[("username", username), ("password", password)],
        )
        .await
    }
}

pub fn assert_redirect(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some(location)
    );
}
