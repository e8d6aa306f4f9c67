use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::{
    domain::password::Password,
    forms::{
        REQUIRED_MESSAGE, empty_secret,
        errors::FormErrors,
        field::{FieldSpec, Form, InputType},
    },
};

/// Credential submission. `next` travels as a hidden field and is validated
/// only when the redirect is chosen.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Credentials that passed form validation; they are not yet authenticated.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Password,
}

impl Form for LoginForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("username", "Usuario", InputType::Text)
            .placeholder("Ingrese su usuario")
            .required(),
        FieldSpec::new("password", "Contraseña", InputType::Password)
            .placeholder("Ingrese su contraseña")
            .required(),
    ];

    fn value_of(&self, field: &str) -> Option<String> {
        match field {
            "username" => Some(self.username.clone()),
            _ => None,
        }
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::new();

        let username = self.username.trim();
        if username.is_empty() {
            errors.add("username", REQUIRED_MESSAGE);
        }
        let password = Password::parse(Secret::new(self.password.expose_secret().clone()))
            .map_err(|e| errors.add("password", e))
            .ok();

        match password {
            Some(password) if errors.is_empty() => Ok(Credentials {
                username: username.to_string(),
                password,
            }),
            _ => Err(errors),
        }
    }
}
