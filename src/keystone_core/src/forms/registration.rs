use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::{
    domain::{
        account::NewAccount,
        email::Email,
        password::{Password, PasswordPolicy},
        profile::{Profile, parse_name},
        username::Username,
    },
    forms::{
        REQUIRED_MESSAGE, empty_secret,
        errors::FormErrors,
        field::{FieldSpec, Form, InputType},
    },
};

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Los dos campos de contraseña no coinciden.";

/// Self-service sign-up submission.
#[derive(Debug, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default = "empty_secret")]
    pub password1: Secret<String>,
    #[serde(default = "empty_secret")]
    pub password2: Secret<String>,
}

impl Form for RegistrationForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("username", "Nombre de usuario", InputType::Text)
            .required()
            .help_text(
                "Requerido. 150 caracteres como máximo. Únicamente letras, dígitos y @/./+/-/_",
            ),
        FieldSpec::new("email", "Correo electrónico", InputType::Email),
        FieldSpec::new("first_name", "Nombre", InputType::Text),
        FieldSpec::new("last_name", "Apellidos", InputType::Text),
        FieldSpec::new("password1", "Contraseña", InputType::Password).required(),
        FieldSpec::new("password2", "Confirmación de contraseña", InputType::Password)
            .required()
            .help_text("Introduzca la misma contraseña que antes, para verificación."),
    ];

    fn value_of(&self, field: &str) -> Option<String> {
        match field {
            "username" => Some(self.username.clone()),
            "email" => Some(self.email.clone()),
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            _ => None,
        }
    }
}

impl RegistrationForm {
    /// Validates everything except username uniqueness, which only the
    /// account store can decide.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<NewAccount, FormErrors> {
        let mut errors = FormErrors::new();

        let username = Username::parse(&self.username)
            .map_err(|e| errors.add("username", e))
            .ok();
        let email = Email::parse_optional(&self.email)
            .map_err(|e| errors.add("email", e))
            .ok();
        let first_name = parse_name(&self.first_name)
            .map_err(|e| errors.add("first_name", e))
            .ok();
        let last_name = parse_name(&self.last_name)
            .map_err(|e| errors.add("last_name", e))
            .ok();

        let password = Password::parse(Secret::new(self.password1.expose_secret().clone()))
            .map_err(|e| errors.add("password1", e))
            .ok();
        if self.password2.expose_secret().is_empty() {
            errors.add("password2", REQUIRED_MESSAGE);
        }

        if let Some(password) = &password {
            let confirmation = self.password2.expose_secret();
            if !confirmation.is_empty() && password.as_ref().expose_secret() != confirmation {
                errors.add("password2", PASSWORD_MISMATCH_MESSAGE);
            } else if !confirmation.is_empty() {
                let email_local_part = self
                    .email
                    .trim()
                    .rsplit_once('@')
                    .map_or("", |(local, _)| local);
                let attributes = [
                    self.username.as_str(),
                    self.first_name.as_str(),
                    self.last_name.as_str(),
                    email_local_part,
                ];
                for violation in policy.violations(password, &attributes) {
                    errors.add("password2", violation);
                }
            }
        }

        match (username, email, first_name, last_name, password) {
            (Some(username), Some(email), Some(first_name), Some(last_name), Some(password))
                if errors.is_empty() =>
            {
                let profile = Profile::new(first_name, last_name, email).map_err(|e| {
                    let mut errors = FormErrors::new();
                    errors.add_non_field(e);
                    errors
                })?;
                Ok(NewAccount {
                    username,
                    password,
                    profile,
                })
            }
            _ => Err(errors),
        }
    }
}
