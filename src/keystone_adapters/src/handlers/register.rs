//! Framework-agnostic registration handlers.

use askama::Template;
use keystone_application::{RegisterError, RegisterUseCase};
use keystone_core::{
    AccountStore, FlashMessage, Form, FormErrors, PasswordPolicy, RegistrationForm, STATUS_OK,
    SessionStore, ViewResponseBuilder,
};

use crate::{
    config::routes::LANDING_ROUTE,
    handlers::{HandlerError, SignedIn},
    views::{Layout, RegisterPage},
};

pub const USERNAME_TAKEN_MESSAGE: &str = "Ya existe un usuario con este nombre.";

/// Renders an empty registration form.
pub fn render_register<B>(signed_in: Option<&SignedIn>, builder: B) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = RegisterPage {
        layout: Layout::new(builder.messages(), signed_in.map(|s| &s.account)),
        fields: RegistrationForm::render_unbound(),
        non_field_errors: Vec::new(),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}

/// Creates the account and signs the visitor in, or redisplays the form.
///
/// Any session the visitor already had is replaced.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn handle_register<A, S, B>(
    account_store: &A,
    session_store: &S,
    password_policy: &PasswordPolicy,
    signed_in: Option<&SignedIn>,
    form: RegistrationForm,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    A: AccountStore,
    S: SessionStore,
    B: ViewResponseBuilder,
{
    let new_account = match form.validate(password_policy) {
        Ok(new_account) => new_account,
        Err(errors) => return redisplay(signed_in, &form, errors, builder),
    };

    let previous_session = signed_in.map(|s| s.session_id);
    match RegisterUseCase::new(account_store, session_store)
        .execute(new_account, previous_session)
        .await
    {
        Ok((account, session_id)) => Ok(builder
            .establish_session(session_id)
            .flash(FlashMessage::success(format!(
                "Bienvenido {}, tu cuenta fue creada correctamente.",
                account.username()
            )))
            .redirect(LANDING_ROUTE)),
        Err(RegisterError::UsernameTaken) => {
            let mut errors = FormErrors::new();
            errors.add("username", USERNAME_TAKEN_MESSAGE);
            redisplay(signed_in, &form, errors, builder)
        }
        Err(e) => Err(HandlerError::unexpected(e)),
    }
}

fn redisplay<B>(
    signed_in: Option<&SignedIn>,
    form: &RegistrationForm,
    errors: FormErrors,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = RegisterPage {
        layout: Layout::new(builder.messages(), signed_in.map(|s| &s.account)),
        fields: form.render(Some(&errors)),
        non_field_errors: errors.non_field().to_vec(),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}
