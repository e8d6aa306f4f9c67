use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    account_id::AccountId,
    password::Password,
    profile::Profile,
    session_id::SessionId,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UsernameTaken, Self::UsernameTaken) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Durable account records. Username uniqueness is case-insensitive and is
/// enforced here, not in the forms.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn add_account(&self, new_account: NewAccount) -> Result<Account, AccountStoreError>;
    /// Looks the username up case-insensitively and verifies the password.
    async fn authenticate(
        &self,
        username: &str,
        password: &Password,
    ) -> Result<Account, AccountStoreError>;
    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError>;
    async fn update_profile(
        &self,
        id: AccountId,
        profile: Profile,
    ) -> Result<Account, AccountStoreError>;
    async fn delete_account(&self, id: AccountId) -> Result<(), AccountStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Server-side sessions keyed by an opaque identifier.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_session(&self, account_id: AccountId) -> Result<SessionId, SessionStoreError>;
    /// `None` when the session is unknown or expired.
    async fn get_account_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AccountId>, SessionStoreError>;
    /// Deleting an unknown session is not an error.
    async fn delete_session(&self, session_id: &SessionId) -> Result<(), SessionStoreError>;
}
