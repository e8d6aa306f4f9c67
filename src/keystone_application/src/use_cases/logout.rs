use keystone_core::{SessionId, SessionStore, SessionStoreError};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Logout use case - discards the server-side session
pub struct LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    session_store: &'a S,
}

impl<'a, S> LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self { session_store }
    }

    /// Anonymous clients have nothing to discard; that is still a success.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, session_id: Option<SessionId>) -> Result<(), LogoutError> {
        if let Some(session_id) = session_id {
            self.session_store.delete_session(&session_id).await?;
        }
        Ok(())
    }
}
