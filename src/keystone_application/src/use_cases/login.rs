use keystone_core::{
    Account, AccountStore, AccountStoreError, Credentials, SessionId, SessionStore,
    SessionStoreError,
};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

impl From<AccountStoreError> for LoginError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountNotFound | AccountStoreError::IncorrectPassword => {
                Self::InvalidCredentials
            }
            other => Self::AccountStoreError(other),
        }
    }
}

/// Login use case - verifies credentials and opens a session
pub struct LoginUseCase<'a, A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    account_store: &'a A,
    session_store: &'a S,
}

impl<'a, A, S> LoginUseCase<'a, A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    pub fn new(account_store: &'a A, session_store: &'a S) -> Self {
        Self {
            account_store,
            session_store,
        }
    }

    /// On success the previous session, if any, is gone and a fresh one
    /// is returned. On failure the previous session is left untouched.
    #[tracing::instrument(
        name = "LoginUseCase::execute",
        skip(self, credentials),
        fields(username = %credentials.username)
    )]
    pub async fn execute(
        &self,
        credentials: Credentials,
        previous_session: Option<SessionId>,
    ) -> Result<(Account, SessionId), LoginError> {
        let account = self
            .account_store
            .authenticate(&credentials.username, &credentials.password)
            .await?;

        if let Some(previous) = previous_session {
            self.session_store.delete_session(&previous).await?;
        }
        let session_id = self.session_store.create_session(account.id()).await?;

        Ok((account, session_id))
    }
}
