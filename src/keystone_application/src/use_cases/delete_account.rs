use keystone_core::{
    AccountId, AccountStore, AccountStoreError, SessionId, SessionStore, SessionStoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Delete account use case - ends the session, then removes the account
pub struct DeleteAccountUseCase<'a, A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    account_store: &'a A,
    session_store: &'a S,
}

impl<'a, A, S> DeleteAccountUseCase<'a, A, S>
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

    /// The session is deleted before the account so no request can observe
    /// a live session for a removed account. An account that is already gone
    /// counts as deleted.
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        session_id: SessionId,
    ) -> Result<(), DeleteAccountError> {
        self.session_store.delete_session(&session_id).await?;

        match self.account_store.delete_account(account_id).await {
            Ok(()) | Err(AccountStoreError::AccountNotFound) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
