use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use keystone_core::{PasswordPolicy, domain::password::DEFAULT_MIN_PASSWORD_LENGTH};
use secrecy::Secret;
use serde::Deserialize;

use crate::config::constants::{
    DEFAULT_FLASH_COOKIE_NAME, DEFAULT_SESSION_COOKIE_NAME, DEFAULT_SESSION_TTL_IN_SECONDS,
    env::{ENVIRONMENT_ENV_VAR, SETTINGS_ENV_PREFIX, SETTINGS_ENV_SEPARATOR},
    prod,
};

/// Service configuration.
///
/// Layered lowest to highest: built-in defaults, `config/base`,
/// `config/{KEYSTONE_ENVIRONMENT}` and `KEYSTONE__SECTION__KEY` variables.
#[derive(Debug, Deserialize)]
pub struct KeystoneSettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub password: PasswordSettings,
    pub storage: StorageSettings,
    pub sessions: SessionBackendSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub assets_dir: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub flash_cookie_name: String,
    pub ttl_in_seconds: u64,
    pub secure_cookies: bool,
    /// At least 64 bytes. Generated at start-up when absent.
    pub cookie_key: Option<Secret<String>>,
}

impl SessionSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_in_seconds)
    }

    pub fn cookies(&self) -> CookieSettings {
        CookieSettings {
            session_cookie_name: self.cookie_name.clone(),
            flash_cookie_name: self.flash_cookie_name.clone(),
            secure: self.secure_cookies,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PasswordSettings {
    pub min_length: usize,
}

impl PasswordSettings {
    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.min_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Memory,
    Redis,
}

#[derive(Debug, Deserialize)]
pub struct SessionBackendSettings {
    pub backend: SessionBackend,
    pub redis_host_name: String,
}

/// Cookie attributes shared by the session and flash cookies. Both are
/// browser-session cookies; session expiry is enforced by the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub session_cookie_name: String,
    pub flash_cookie_name: String,
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            flash_cookie_name: DEFAULT_FLASH_COOKIE_NAME.to_string(),
            secure: false,
        }
    }
}

impl KeystoneSettings {
    /// Reads `.env` if present, then builds the layered configuration.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment =
            std::env::var(ENVIRONMENT_ENV_VAR).unwrap_or_else(|_| "local".to_string());

        Self::builder(&environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("application.host", prod::APP_HOST)?
            .set_default("application.port", i64::from(prod::APP_PORT))?
            .set_default("application.assets_dir", prod::ASSETS_DIR)?
            .set_default("session.cookie_name", DEFAULT_SESSION_COOKIE_NAME)?
            .set_default("session.flash_cookie_name", DEFAULT_FLASH_COOKIE_NAME)?
            .set_default("session.ttl_in_seconds", DEFAULT_SESSION_TTL_IN_SECONDS as i64)?
            .set_default("session.secure_cookies", false)?
            .set_default("password.min_length", DEFAULT_MIN_PASSWORD_LENGTH as i64)?
            .set_default("storage.backend", "memory")?
            .set_default("storage.max_connections", 5)?
            .set_default("sessions.backend", "memory")?
            .set_default("sessions.redis_host_name", "127.0.0.1")?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .prefix_separator(SETTINGS_ENV_SEPARATOR)
                    .separator(SETTINGS_ENV_SEPARATOR)
                    .try_parsing(true),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let settings: KeystoneSettings = KeystoneSettings::builder("test-defaults")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.session.cookie_name, DEFAULT_SESSION_COOKIE_NAME);
        assert_eq!(settings.password.policy(), PasswordPolicy::default());
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(settings.sessions.backend, SessionBackend::Memory);
        assert!(settings.session.cookie_key.is_none());
    }

    #[test]
    fn test_cookie_settings_follow_session_section() {
        let session = SessionSettings {
            cookie_name: "sid".to_string(),
            flash_cookie_name: "flash".to_string(),
            ttl_in_seconds: 60,
            secure_cookies: true,
            cookie_key: None,
        };

        let cookies = session.cookies();
        assert_eq!(cookies.session_cookie_name, "sid");
        assert_eq!(cookies.flash_cookie_name, "flash");
        assert_eq!(session.ttl(), Duration::from_secs(60));
        assert!(cookies.secure);
    }
}
