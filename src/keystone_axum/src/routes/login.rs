//! Axum-specific login routes.

use axum::{
    Form,
    extract::{Query, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;
use keystone_adapters::handlers;
use keystone_core::{AccountStore, LoginForm, SessionStore};
use serde::Deserialize;

use crate::{AppState, AxumViewBuilder, MaybeAccount, ViewError};

/// The `next` query parameter carried by login links.
#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

#[tracing::instrument(name = "Login page", skip_all)]
pub async fn login_page<A, S>(
    State(state): State<AppState<A, S>>,
    MaybeAccount(signed_in): MaybeAccount,
    jar: PrivateCookieJar,
    Query(query): Query<NextQuery>,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_login(signed_in.as_ref(), query.next, builder)?)
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<A, S>(
    State(state): State<AppState<A, S>>,
    MaybeAccount(signed_in): MaybeAccount,
    jar: PrivateCookieJar,
    Query(query): Query<NextQuery>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::handle_login(
        &*state.accounts,
        &*state.sessions,
        signed_in.as_ref(),
        form,
        query.next,
        builder,
    )
    .await?)
}
