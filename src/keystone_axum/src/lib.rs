//! Axum integration for the keystone account pages.
//!
//! This crate adapts the framework-agnostic handlers in
//! `keystone_adapters::handlers` to Axum.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  keystone_core: ViewResponseBuilder      │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  keystone_axum: Axum implementations     │
//! │  - AxumViewBuilder over private cookies  │
//! │  - CurrentAccount / MaybeAccount         │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use keystone_axum::{AppState, routes};
//!
//! let app = Router::new()
//!     .route("/accounts/login", get(routes::login_page::<A, S>).post(routes::login::<A, S>))
//!     .with_state(state);
//! ```

pub mod builder;
pub mod errors;
pub mod extractors;
pub mod routes;
pub mod state;

// Re-export for convenience
pub use builder::AxumViewBuilder;
pub use errors::ViewError;
pub use extractors::{CurrentAccount, MaybeAccount};
pub use state::{AppState, cookie_key_from_settings};
