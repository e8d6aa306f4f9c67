use serde::Deserialize;

use crate::{
    domain::{
        account::Account,
        email::Email,
        profile::{Profile, parse_name},
    },
    forms::{
        errors::FormErrors,
        field::{FieldSpec, Form, InputType},
    },
};

/// Profile edit submission. Never carries an account identifier: the target
/// is always the requesting session's account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl Form for ProfileForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("first_name", "Nombre", InputType::Text),
        FieldSpec::new("last_name", "Apellidos", InputType::Text),
        FieldSpec::new("email", "Correo electrónico", InputType::Email),
    ];

    fn value_of(&self, field: &str) -> Option<String> {
        match field {
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "email" => Some(self.email.clone()),
            _ => None,
        }
    }
}

impl ProfileForm {
    /// Form pre-filled with the account's current attributes.
    pub fn from_account(account: &Account) -> Self {
        let profile = account.profile();
        Self {
            first_name: profile.first_name().to_string(),
            last_name: profile.last_name().to_string(),
            email: profile
                .email()
                .map(|email| email.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<Profile, FormErrors> {
        let mut errors = FormErrors::new();

        let first_name = parse_name(&self.first_name)
            .map_err(|e| errors.add("first_name", e))
            .ok();
        let last_name = parse_name(&self.last_name)
            .map_err(|e| errors.add("last_name", e))
            .ok();
        let email = Email::parse_optional(&self.email)
            .map_err(|e| errors.add("email", e))
            .ok();

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => {
                Profile::new(first_name, last_name, email).map_err(|e| {
                    errors.add_non_field(e);
                    errors
                })
            }
            _ => Err(errors),
        }
    }
}
