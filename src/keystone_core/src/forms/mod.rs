//! Declarative form definitions.
//!
//! Each form carries its field display metadata as a static [`FieldSpec`]
//! table and turns a submission into validated domain values or a
//! [`FormErrors`] map suitable for redisplay.

pub mod errors;
pub mod field;
pub mod login;
pub mod profile;
pub mod registration;

pub use errors::FormErrors;
pub use field::{FieldSpec, Form, InputType, RenderedField, render_fields};
pub use login::{Credentials, LoginForm};
pub use profile::ProfileForm;
pub use registration::RegistrationForm;

pub(crate) const REQUIRED_MESSAGE: &str = "Este campo es obligatorio.";

pub(crate) fn empty_secret() -> secrecy::Secret<String> {
    secrecy::Secret::new(String::new())
}
