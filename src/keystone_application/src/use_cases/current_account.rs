use keystone_core::{
    Account, AccountStore, AccountStoreError, SessionId, SessionStore, SessionStoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum CurrentAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Resolves the account a session belongs to
pub struct CurrentAccountUseCase<'a, A, S>
where
    A: AccountStore,
    S: SessionStore,
{
    account_store: &'a A,
    session_store: &'a S,
}

impl<'a, A, S> CurrentAccountUseCase<'a, A, S>
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

    /// `None` means the client is anonymous. A session whose account no
    /// longer exists is deleted on the way.
    #[tracing::instrument(name = "CurrentAccountUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Account>, CurrentAccountError> {
        let Some(account_id) = self.session_store.get_account_id(session_id).await? else {
            return Ok(None);
        };

        match self.account_store.get_account(account_id).await {
            Ok(account) => Ok(Some(account)),
            Err(AccountStoreError::AccountNotFound) => {
                tracing::debug!("Session refers to a deleted account, discarding it");
                self.session_store.delete_session(session_id).await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
