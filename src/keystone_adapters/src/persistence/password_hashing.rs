//! Argon2id hashing shared by the account stores.
//!
//! Hashing is CPU bound, so both directions run on the blocking pool inside
//! the caller's span.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use keystone_core::Password;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::OnceCell;

/// Hash verified when a login names an unknown user, so both failure paths
/// cost one verification.
static DUMMY_PASSWORD_HASH: OnceCell<Secret<String>> = OnceCell::const_new();

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

/// `Ok(true)` when the candidate matches, `Ok(false)` when it does not, and an
/// error only when the stored hash is unusable.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<bool, String> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            match hasher()?.verify_password(
                password_candidate.as_ref().expose_secret().as_bytes(),
                &expected_password_hash,
            ) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(e.to_string()),
            }
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

/// Spends one verification against a throwaway hash and discards the outcome.
#[tracing::instrument(name = "Verify dummy password hash", skip_all)]
pub async fn verify_dummy_password_hash(password_candidate: Password) -> Result<(), String> {
    let dummy = DUMMY_PASSWORD_HASH
        .get_or_try_init(|| async {
            let throwaway = Password::parse(Secret::new("keystone-unknown-account".to_string()))
                .map_err(|e| e.to_string())?;
            compute_password_hash(throwaway).await
        })
        .await?;

    verify_password_hash(Secret::new(dummy.expose_secret().clone()), password_candidate).await?;
    Ok(())
}
