//! Axum-specific landing route.

use axum::{extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;
use keystone_adapters::handlers;
use keystone_core::{AccountStore, SessionStore};

use crate::{AppState, AxumViewBuilder, MaybeAccount, ViewError};

#[tracing::instrument(name = "Landing", skip_all)]
pub async fn landing<A, S>(
    State(state): State<AppState<A, S>>,
    MaybeAccount(signed_in): MaybeAccount,
    jar: PrivateCookieJar,
) -> Result<Response, ViewError>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let builder = AxumViewBuilder::new(jar, state.cookies.clone());
    Ok(handlers::render_landing(signed_in.as_ref(), builder)?)
}
