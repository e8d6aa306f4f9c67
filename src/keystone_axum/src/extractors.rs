//! Request extractors resolving the session cookie to an account.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use keystone_adapters::{config::routes::LOGIN_ROUTE, handlers::SignedIn};
use keystone_application::CurrentAccountUseCase;
use keystone_core::{AccountStore, SessionId, SessionStore, ViewResponseBuilder};

use crate::{builder::AxumViewBuilder, errors::ViewError, state::AppState};

/// The signed-in account. Anonymous requests are redirected to the login
/// page with `next` set to the requested path and query.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub SignedIn);

/// The signed-in account, if any. Never rejects except on store failures.
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<SignedIn>);

async fn resolve<A, S>(
    jar: &PrivateCookieJar,
    state: &AppState<A, S>,
) -> Result<Option<SignedIn>, ViewError>
where
    A: AccountStore,
    S: SessionStore,
{
    let Some(session_id) = jar
        .get(&state.cookies.session_cookie_name)
        .and_then(|cookie| SessionId::parse(cookie.value()))
    else {
        return Ok(None);
    };

    let account = CurrentAccountUseCase::new(&*state.accounts, &*state.sessions)
        .execute(&session_id)
        .await
        .map_err(|e| ViewError::Session(e.to_string()))?;

    Ok(account.map(|account| SignedIn {
        account,
        session_id,
    }))
}

/// `/accounts/login?next=<path and query>` for the request being rejected.
fn login_redirect_target(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or(&parts.uri);
    let next = uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or_else(|| uri.path());

    match serde_urlencoded::to_string(&[("next", next)]) {
        Ok(query) => format!("{LOGIN_ROUTE}?{query}"),
        Err(_) => LOGIN_ROUTE.to_string(),
    }
}

impl<A, S> FromRequestParts<AppState<A, S>> for CurrentAccount
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<A, S>,
    ) -> Result<Self, Self::Rejection> {
        let Ok(jar) = PrivateCookieJar::<Key>::from_request_parts(parts, state).await;

        match resolve(&jar, state).await {
            Ok(Some(signed_in)) => Ok(CurrentAccount(signed_in)),
            Ok(None) => {
                tracing::info!("No valid session, redirecting to login");
                let had_cookie = jar.get(&state.cookies.session_cookie_name).is_some();
                let mut builder = AxumViewBuilder::new(jar, state.cookies.clone());
                if had_cookie {
                    builder = builder.end_session();
                }
                Err(builder.redirect(&login_redirect_target(parts)))
            }
            Err(e) => Err(e.into_response()),
        }
    }
}

impl<A, S> FromRequestParts<AppState<A, S>> for MaybeAccount
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    type Rejection = ViewError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<A, S>,
    ) -> Result<Self, Self::Rejection> {
        let Ok(jar) = PrivateCookieJar::<Key>::from_request_parts(parts, state).await;

        Ok(MaybeAccount(resolve(&jar, state).await?))
    }
}
