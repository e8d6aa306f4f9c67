//! # Keystone - Account Pages Library
//!
//! Facade crate re-exporting the public APIs of the keystone components:
//! registration, login and logout, profile view and edit, and account
//! deletion, served as server-rendered HTML pages.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! keystone = { path = "../keystone" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Username`, `Password`, `Profile`, forms
//! - **Store traits**: `AccountStore`, `SessionStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `RedisSessionStore`, page handlers, settings
//! - **Service**: `AccountsService`, the router serving every page

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, forms and value objects
pub mod core {
    pub use keystone_core::*;
}

pub use keystone_core::{
    Account, AccountId, Email, FlashLevel, FlashMessage, LoginForm, NewAccount, NextUrl,
    Password, PasswordPolicy, Profile, ProfileForm, RegistrationForm, SessionId, Username,
};

// ============================================================================
// Store Traits (Ports)
// ============================================================================

pub use keystone_core::{AccountStore, AccountStoreError, SessionStore, SessionStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use keystone_application::*;
}

pub use keystone_application::{
    CurrentAccountUseCase, DeleteAccountUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase,
    UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic page handlers
    pub mod handlers {
        pub use keystone_adapters::handlers::*;
    }

    /// Store implementations
    pub mod persistence {
        pub use keystone_adapters::persistence::*;
    }

    /// Askama page templates
    pub mod views {
        pub use keystone_adapters::views::*;
    }

    /// Settings and route constants
    pub mod config {
        pub use keystone_adapters::config::*;
    }

    /// Axum extractors, response builder and routes
    pub mod axum {
        pub use keystone_axum::*;
    }
}

pub use keystone_adapters::{
    HashMapAccountStore, HashMapSessionStore, PostgresAccountStore, RedisSessionStore,
};

// ============================================================================
// Accounts Service (Main Entry Point)
// ============================================================================

pub use keystone_axum::AppState;
pub use keystone_service::{
    AccountsService,
    helpers::{configure_postgresql, configure_redis, get_redis_client},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
