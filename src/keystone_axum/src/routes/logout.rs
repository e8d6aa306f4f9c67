//! Axum-specific logout routes.

use axum::{extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;
use keystone_adapters::handlers;
use keystone_core::{AccountStore, SessionStore};

use crate::{AppState, AxumViewBuilder, CurrentAccount, ViewError};

#[tracing::instrument(name = "Logout page", skip_all)]
pub async fn logout_page<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_logout(&signed_in, builder)?)
}

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::handle_logout(&*state.sessions, &signed_in, builder).await?)
}
