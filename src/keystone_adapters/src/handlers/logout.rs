//! Framework-agnostic logout handlers.

use askama::Template;
use keystone_application::LogoutUseCase;
use keystone_core::{FlashMessage, STATUS_OK, SessionStore, ViewResponseBuilder};

use crate::{
    config::routes::LANDING_ROUTE,
    handlers::{HandlerError, SignedIn},
    views::{Layout, LogoutPage},
};

/// Renders the logout confirmation page.
pub fn render_logout<B>(signed_in: &SignedIn, builder: B) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = LogoutPage {
        layout: Layout::new(builder.messages(), Some(&signed_in.account)),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn handle_logout<S, B>(
    session_store: &S,
    signed_in: &SignedIn,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    S: SessionStore,
    B: ViewResponseBuilder,
{
    LogoutUseCase::new(session_store)
        .execute(Some(signed_in.session_id))
        .await
        .map_err(HandlerError::unexpected)?;

    Ok(builder
        .end_session()
        .flash(FlashMessage::success("Has cerrado sesión correctamente"))
        .redirect(LANDING_ROUTE))
}
