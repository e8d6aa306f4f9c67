//! Axum-specific registration routes.
//!
//! These routes only extract request data; the page logic lives in the
//! framework-agnostic handlers.

use axum::{Form, extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;
use keystone_adapters::handlers;
use keystone_core::{AccountStore, RegistrationForm, SessionStore};

use crate::{AppState, AxumViewBuilder, MaybeAccount, ViewError};

#[tracing::instrument(name = "Registration page", skip_all)]
pub async fn register_page<A, S>(
    State(state): State<AppState<A, S>>,
    MaybeAccount(signed_in): MaybeAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_register(signed_in.as_ref(), builder)?)
}

#[tracing::instrument(name = "Registration", skip_all)]
pub async fn register<A, S>(
    State(state): State<AppState<A, S>>,
    MaybeAccount(signed_in): MaybeAccount,
    jar: PrivateCookieJar,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::handle_register(
        &*state.accounts,
        &*state.sessions,
        &state.password_policy,
        signed_in.as_ref(),
        form,
        builder,
    )
    .await?)
}
