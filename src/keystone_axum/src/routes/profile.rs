//! Axum-specific profile routes.

use axum::{Form, extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;
use keystone_adapters::handlers;
use keystone_core::{AccountStore, ProfileForm, SessionStore};

use crate::{AppState, AxumViewBuilder, CurrentAccount, ViewError};

#[tracing::instrument(name = "Profile", skip_all)]
pub async fn profile<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_profile(&signed_in, builder)?)
}

#[tracing::instrument(name = "Edit profile page", skip_all)]
pub async fn edit_profile_page<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_edit_profile(&signed_in, builder)?)
}

#[tracing::instrument(name = "Edit profile", skip_all)]
pub async fn edit_profile<A, S>(
    State(state): State<AppState<A, S>>,
    CurrentAccount(signed_in): CurrentAccount,
    jar: PrivateCookieJar,
    Form(form): Form<ProfileForm>,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::handle_edit_profile(&*state.accounts, &signed_in, form, builder).await?)
}
