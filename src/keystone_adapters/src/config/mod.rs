pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    ApplicationSettings, CookieSettings, KeystoneSettings, PasswordSettings, SessionBackend,
    SessionBackendSettings, SessionSettings, StorageBackend, StorageSettings,
};
