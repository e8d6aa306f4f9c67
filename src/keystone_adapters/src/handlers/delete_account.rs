//! Framework-agnostic account deletion handlers.

use askama::Template;
use keystone_application::DeleteAccountUseCase;
use keystone_core::{AccountStore, FlashMessage, STATUS_OK, SessionStore, ViewResponseBuilder};

use crate::{
    config::routes::LANDING_ROUTE,
    handlers::{HandlerError, SignedIn},
    views::{DeleteAccountPage, Layout},
};

/// Renders the deletion confirmation page.
pub fn render_delete_account<B>(
    signed_in: &SignedIn,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = DeleteAccountPage {
        layout: Layout::new(builder.messages(), Some(&signed_in.account)),
        username: signed_in.account.username().to_string(),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}

/// Signs the visitor out and removes their account.
#[tracing::instrument(name = "Delete account", skip_all)]
pub async fn handle_delete_account<A, S, B>(
    account_store: &A,
    session_store: &S,
    signed_in: &SignedIn,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    A: AccountStore,
    S: SessionStore,
    B: ViewResponseBuilder,
{
    DeleteAccountUseCase::new(account_store, session_store)
        .execute(signed_in.account.id(), signed_in.session_id)
        .await
        .map_err(HandlerError::unexpected)?;

    Ok(builder
        .end_session()
        .flash(FlashMessage::success("Tu cuenta fue eliminada correctamente."))
        .redirect(LANDING_ROUTE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{RecordingBuilder, SessionChange, seed_account, stores};
    use keystone_core::AccountStoreError;

    #[tokio::test]
    async fn test_delete_removes_account_and_session() {
        let (accounts, sessions) = stores();
        let account = seed_account(&accounts, "alopez").await;
        let session_id = sessions.create_session(account.id()).await.unwrap();
        let signed_in = SignedIn {
            account: account.clone(),
            session_id,
        };

        let response =
            handle_delete_account(&accounts, &sessions, &signed_in, RecordingBuilder::default())
                .await
                .unwrap();

        assert_eq!(response.status, 302);
        assert_eq!(response.location.as_deref(), Some("/"));
        assert_eq!(response.session, SessionChange::Ended);
        assert_eq!(sessions.get_account_id(&session_id).await.unwrap(), None);
        assert_eq!(
            accounts.get_account(account.id()).await.unwrap_err(),
            AccountStoreError::AccountNotFound
        );
        assert_eq!(
            response.carried_messages,
            vec![FlashMessage::success("Tu cuenta fue eliminada correctamente.")]
        );
    }

    #[tokio::test]
    async fn test_confirmation_page_names_the_account() {
        let (accounts, _) = stores();
        let account = seed_account(&accounts, "alopez").await;
        let signed_in = SignedIn {
            account,
            session_id: keystone_core::SessionId::new(),
        };

        let response = render_delete_account(&signed_in, RecordingBuilder::default()).unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.contains("alopez"));
    }
}
