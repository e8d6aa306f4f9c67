use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const USERNAME_MAX_LENGTH: usize = 150;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.@+-]+$").expect("username pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Este campo es obligatorio.")]
    Empty,
    #[error("Asegúrese de que este valor tenga como máximo 150 caracteres.")]
    TooLong,
    #[error(
        "Introduzca un nombre de usuario válido. Este valor solo puede contener letras, números y los caracteres @/./+/-/_."
    )]
    InvalidCharacters,
}

/// Login name of an account.
///
/// Uniqueness is case-insensitive, so stores compare [`Username::normalized`]
/// rather than the display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, UsernameError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }
        if trimmed.chars().count() > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong);
        }
        if !USERNAME_PATTERN.is_match(trimmed) {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for uniqueness checks.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.normalized() == candidate.trim().to_lowercase()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Username::parse(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
