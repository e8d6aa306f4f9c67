use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::email::Email;

pub const NAME_MAX_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Asegúrese de que este valor tenga como máximo 150 caracteres.")]
    NameTooLong,
}

/// Editable, non-credential attributes of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    first_name: String,
    last_name: String,
    email: Option<Email>,
}

impl Profile {
    pub fn new(
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
        email: Option<Email>,
    ) -> Result<Self, ProfileError> {
        Ok(Self {
            first_name: parse_name(first_name.as_ref())?,
            last_name: parse_name(last_name.as_ref())?,
            email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn full_name(&self) -> Option<String> {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        (!full.is_empty()).then(|| full.to_string())
    }
}

/// Trims a first or last name and enforces its length limit.
pub fn parse_name(raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > NAME_MAX_LENGTH {
        return Err(ProfileError::NameTooLong);
    }
    Ok(trimmed.to_string())
}
