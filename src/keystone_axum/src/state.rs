use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use keystone_adapters::config::{CookieSettings, SessionSettings};
use keystone_core::{AccountStore, PasswordPolicy, SessionStore};
use secrecy::ExposeSecret;

/// Shared state for every account route.
pub struct AppState<A, S> {
    pub accounts: Arc<A>,
    pub sessions: Arc<S>,
    pub cookie_key: Key,
    pub cookies: Arc<CookieSettings>,
    pub password_policy: PasswordPolicy,
}

impl<A, S> AppState<A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    pub fn new(
        accounts: A,
        sessions: S,
        cookie_key: Key,
        cookies: CookieSettings,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            accounts: Arc::new(accounts),
            sessions: Arc::new(sessions),
            cookie_key,
            cookies: Arc::new(cookies),
            password_policy,
        }
    }
}

impl<A, S> Clone for AppState<A, S> {
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            sessions: self.sessions.clone(),
            cookie_key: self.cookie_key.clone(),
            cookies: self.cookies.clone(),
            password_policy: self.password_policy,
        }
    }
}

impl<A, S> FromRef<AppState<A, S>> for Key {
    fn from_ref(state: &AppState<A, S>) -> Self {
        state.cookie_key.clone()
    }
}

/// Builds the cookie signing and encryption key from the configured secret,
/// which must be at least 64 bytes long. Without one a random key is
/// generated, so cookies do not survive a restart.
pub fn cookie_key_from_settings(settings: &SessionSettings) -> Result<Key, String> {
    match &settings.cookie_key {
        Some(secret) => Key::try_from(secret.expose_secret().as_bytes())
            .map_err(|e| format!("Invalid session.cookie_key: {e}")),
        None => {
            tracing::warn!("No session.cookie_key configured, generating a random key");
            Ok(Key::generate())
        }
    }
}
