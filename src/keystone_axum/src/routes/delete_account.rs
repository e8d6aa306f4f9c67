//! Axum-specific account deletion routes.

use axum::{extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;
use keystone_adapters::handlers;
use keystone_core::{AccountStore, SessionStore};

use crate::{AppState, AxumViewBuilder, CurrentAccount, ViewError};

#[tracing::instrument(name = "Delete account page", skip_all)]
pub async fn delete_account_page<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_delete_account(&signed_in, builder)?)
}

#[tracing::instrument(name = "Delete account", skip_all)]
pub async fn delete_account<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::handle_delete_account(
        &*state.accounts,
        &*state.sessions,
        &signed_in,
        builder,
    )
    .await?)
}
