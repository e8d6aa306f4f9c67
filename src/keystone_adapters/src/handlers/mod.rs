//! Framework-agnostic account page handlers.
//!
//! These handlers hold the page logic without any framework dependencies.
//! Framework-specific routes extract the form, query and session from the
//! request, call these handlers with a [`ViewResponseBuilder`], and return
//! whatever response the builder produces.
//!
//! Validation and authentication failures are rendered pages, not errors.
//! [`HandlerError`] is reserved for failures the visitor cannot fix.
//!
//! [`ViewResponseBuilder`]: keystone_core::ViewResponseBuilder

pub mod delete_account;
pub mod landing;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;

#[cfg(test)]
pub(crate) mod test_support;

use keystone_core::{Account, SessionId};
use thiserror::Error;

pub use delete_account::{handle_delete_account, render_delete_account};
pub use landing::render_landing;
pub use login::{handle_login, render_login};
pub use logout::{handle_logout, render_logout};
pub use profile::{handle_edit_profile, render_edit_profile, render_profile};
pub use register::{handle_register, render_register};

/// An account resolved from the request's session cookie.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub account: Account,
    pub session_id: SessionId,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl HandlerError {
    pub(crate) fn unexpected(error: impl std::fmt::Display) -> Self {
        Self::Unexpected(error.to_string())
    }
}
