use keystone_core::{
    Account, AccountStore, AccountStoreError, NewAccount, SessionId, SessionStore,
    SessionStoreError,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

impl From<AccountStoreError> for RegisterError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::UsernameTaken => Self::UsernameTaken,
            other => Self::AccountStoreError(other),
        }
    }
}

/// Register use case - creates an account and signs the new account in
pub struct RegisterUseCase<'a, A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    account_store: &'a A,
    session_store: &'a S,
}

impl<'a, A, S> RegisterUseCase<'a, A, S>
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

    /// Persists `new_account` and opens a session for it. Any session the
    /// client already held is discarded first.
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, new_account),
        fields(username = %new_account.username)
    )]
    pub async fn execute(
        &self,
        new_account: NewAccount,
        previous_session: Option<SessionId>,
    ) -> Result<(Account, SessionId), RegisterError> {
        let account = self.account_store.add_account(new_account).await?;

        if let Some(previous) = previous_session {
            self.session_store.delete_session(&previous).await?;
        }
        let session_id = self.session_store.create_session(account.id()).await?;

        Ok((account, session_id))
    }
}
