//! Framework-agnostic profile handlers.
//!
//! Every handler here acts on the signed-in account only; no account
//! identifier is ever read from the request.

use askama::Template;
use keystone_application::UpdateProfileUseCase;
use keystone_core::{
    AccountStore, FlashMessage, Form, FormErrors, ProfileForm, STATUS_OK, ViewResponseBuilder,
};

use crate::{
    config::routes::PROFILE_ROUTE,
    handlers::{HandlerError, SignedIn},
    views::{EditProfilePage, Layout, ProfilePage},
};

pub fn render_profile<B>(signed_in: &SignedIn, builder: B) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let layout = Layout::new(builder.messages(), Some(&signed_in.account));
    let page = ProfilePage::new(layout, &signed_in.account);
    Ok(builder.render(STATUS_OK, page.render()?))
}

/// Renders the edit form pre-filled with the current values.
pub fn render_edit_profile<B>(signed_in: &SignedIn, builder: B) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let form = ProfileForm::from_account(&signed_in.account);
    render_edit_form(signed_in, &form, FormErrors::new(), builder)
}

#[tracing::instrument(name = "Edit profile", skip_all)]
pub async fn handle_edit_profile<A, B>(
    account_store: &A,
    signed_in: &SignedIn,
    form: ProfileForm,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    A: AccountStore,
    B: ViewResponseBuilder,
{
    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(errors) => return render_edit_form(signed_in, &form, errors, builder),
    };

    UpdateProfileUseCase::new(account_store)
        .execute(signed_in.account.id(), profile)
        .await
        .map_err(HandlerError::unexpected)?;

    Ok(builder
        .flash(FlashMessage::success("Perfil actualizado correctamente"))
        .redirect(PROFILE_ROUTE))
}

fn render_edit_form<B>(
    signed_in: &SignedIn,
    form: &ProfileForm,
    errors: FormErrors,
    builder: B,
) -> Result<B::Response, HandlerError>
where
    B: ViewResponseBuilder,
{
    let page = EditProfilePage {
        layout: Layout::new(builder.messages(), Some(&signed_in.account)),
        fields: form.render(Some(&errors)),
        non_field_errors: errors.non_field().to_vec(),
    };
    Ok(builder.render(STATUS_OK, page.render()?))
}
