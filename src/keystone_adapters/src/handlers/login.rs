//! Framework-agnostic login handlers.

use askama::Template;
use keystone_application::{LoginError, LoginUseCase};
use keystone_core::{
    AccountStore, FlashMessage, Form, FormErrors, LoginForm, NextUrl, STATUS_OK, SessionStore,
    ViewResponseBuilder,
};

use crate::{
    config::routes::LANDING_ROUTE,
    handlers::{HandlerError, SignedIn},
    views::{Layout, LoginPage},
};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Usuario o contraseña incorrectos";

/// Renders the login form. `next` is written into a hidden field as given;
/// it is only validated when the redirect happens.
pub fn render_login<B>(
    signed_in: Option<&SignedIn>,
    next: Option<String>,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = LoginPage {
        layout: Layout::new(builder.messages(), signed_in.map(|s| &s.account)),
        fields: LoginForm::render_unbound(),
        non_field_errors: Vec::new(),
        next: next.unwrap_or_default(),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}

/// Authenticates the submitted credentials.
///
/// On success the visitor gets a fresh session and is redirected to the
/// first non-empty of the form's and the query's `next`, provided it is a
/// local path, or to the landing page otherwise. Any failure shows the same
/// error message whether the username exists or not.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn handle_login<A, S, B>(
    account_store: &A,
    session_store: &S,
    signed_in: Option<&SignedIn>,
    form: LoginForm,
    query_next: Option<String>,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    A: AccountStore,
    S: SessionStore,
    B: ViewResponseBuilder,
{
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => {
            return redisplay(signed_in, &form, query_next, errors, builder);
        }
    };

    let previous_session = signed_in.map(|s| s.session_id);
    match LoginUseCase::new(account_store, session_store)
        .execute(credentials, previous_session)
        .await
    {
        Ok((account, session_id)) => {
            let target = NextUrl::resolve(form.next.as_deref(), query_next.as_deref());
            let location = target.as_ref().map_or(LANDING_ROUTE, NextUrl::as_str);
            Ok(builder
                .establish_session(session_id)
                .flash(FlashMessage::success(format!(
                    "Bienvenido {}",
                    account.username()
                )))
                .redirect(location))
        }
        Err(LoginError::InvalidCredentials) => {
            tracing::info!("Rejected login attempt");
            redisplay(signed_in, &form, query_next, FormErrors::new(), builder)
        }
        Err(e) => Err(HandlerError::unexpected(e)),
    }
}

fn redisplay<B>(
    signed_in: Option<&SignedIn>,
    form: &LoginForm,
    query_next: Option<String>,
    errors: FormErrors,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let builder = builder.flash(FlashMessage::error(INVALID_CREDENTIALS_MESSAGE));
    let next = [form.next.clone(), query_next]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default();

    let page = LoginPage {
        layout: Layout::new(builder.messages(), signed_in.map(|s| &s.account)),
        fields: form.render(Some(&errors)),
        non_field_errors: errors.non_field().to_vec(),
        next,
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}
