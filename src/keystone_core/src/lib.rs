pub mod domain;
pub mod forms;
pub mod ports;
pub mod view_response;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, NewAccount},
    account_id::AccountId,
    email::{Email, EmailError},
    flash::{FlashLevel, FlashMessage},
    next_url::NextUrl,
    password::{Password, PasswordError, PasswordPolicy},
    profile::{Profile, ProfileError},
    session_id::SessionId,
    username::{Username, UsernameError},
};

pub use forms::{
    Credentials, FieldSpec, Form, FormErrors, InputType, LoginForm, ProfileForm,
    RegistrationForm, RenderedField,
};

pub use ports::repositories::{
    AccountStore, AccountStoreError, SessionStore, SessionStoreError,
};

pub use view_response::{
    STATUS_FOUND, STATUS_INTERNAL_SERVER_ERROR, STATUS_OK, ViewResponseBuilder,
};
