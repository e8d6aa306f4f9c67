use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Attributes shorter than this are not used for similarity checks.
const MIN_SIMILARITY_ATTRIBUTE_LENGTH: usize = 3;

const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "123456789",
    "12345678",
    "password",
    "password1",
    "contraseña",
    "qwerty",
    "qwerty123",
    "abc123",
    "111111",
    "123123",
    "iloveyou",
    "admin",
    "admin123",
    "welcome",
    "letmein",
    "monkey",
    "dragon",
    "football",
    "sunshine",
    "princess",
    "superman",
    "trustno1",
    "passw0rd",
    "1q2w3e4r",
    "teamo123",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Este campo es obligatorio.")]
    Empty,
    #[error("La contraseña es demasiado corta. Debe contener al menos {min_length} caracteres.")]
    TooShort { min_length: usize },
    #[error("La contraseña es demasiado común.")]
    TooCommon,
    #[error("La contraseña está completamente compuesta por números.")]
    EntirelyNumeric,
    #[error("La contraseña es demasiado similar a la información personal.")]
    TooSimilar,
}

/// A password as submitted by a client.
///
/// Construction only rejects empty input; strength rules live in
/// [`PasswordPolicy`] because login must accept whatever was set earlier.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Secret<String>")]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(secret: Secret<String>) -> Result<Self, PasswordError> {
        if secret.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(secret))
    }
}

impl Clone for Password {
    fn clone(&self) -> Self {
        Self(Secret::new(self.0.expose_secret().clone()))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Password::parse(value)
    }
}

/// Strength rules applied when a password is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns every rule the candidate violates, in a stable order.
    ///
    /// `personal_attributes` are values such as the username or names the
    /// password must not resemble.
    pub fn violations(
        &self,
        password: &Password,
        personal_attributes: &[&str],
    ) -> Vec<PasswordError> {
        let candidate = password.as_ref().expose_secret();
        let lowered = candidate.to_lowercase();
        let mut errors = Vec::new();

        if is_too_similar(&lowered, personal_attributes) {
            errors.push(PasswordError::TooSimilar);
        }
        if candidate.chars().count() < self.min_length {
            errors.push(PasswordError::TooShort {
                min_length: self.min_length,
            });
        }
        if COMMON_PASSWORDS.contains(&lowered.trim()) {
            errors.push(PasswordError::TooCommon);
        }
        if candidate.chars().all(|c| c.is_ascii_digit()) {
            errors.push(PasswordError::EntirelyNumeric);
        }

        errors
    }
}

fn is_too_similar(lowered_password: &str, personal_attributes: &[&str]) -> bool {
    personal_attributes
        .iter()
        .flat_map(|attribute| {
            let lowered = attribute.to_lowercase();
            let mut parts: Vec<String> = lowered
                .split(|c: char| !c.is_alphanumeric())
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            parts.push(lowered);
            parts
        })
        .filter(|part| part.chars().count() >= MIN_SIMILARITY_ATTRIBUTE_LENGTH)
        .any(|part| lowered_password.contains(&part) || part.contains(lowered_password))
}
