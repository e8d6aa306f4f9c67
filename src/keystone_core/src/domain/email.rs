use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Introduzca una dirección de correo electrónico válida.")]
    Invalid,
    #[error("Asegúrese de que este valor tenga como máximo 254 caracteres.")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses an address, lower-casing the domain part.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.chars().count() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(EmailError::Invalid);
        }

        let (local, domain) = trimmed.rsplit_once('@').ok_or(EmailError::Invalid)?;
        Ok(Self(format!("{local}@{}", domain.to_lowercase())))
    }

    /// Empty input means "no address".
    pub fn parse_optional(raw: impl AsRef<str>) -> Result<Option<Self>, EmailError> {
        if raw.as_ref().trim().is_empty() {
            return Ok(None);
        }
        Self::parse(raw).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
