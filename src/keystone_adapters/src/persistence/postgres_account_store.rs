use chrono::{DateTime, Utc};
use keystone_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, NewAccount, Password, Profile,
    Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::persistence::password_hashing::{
    compute_password_hash, verify_dummy_password_hash, verify_password_hash,
};

pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
    date_joined: DateTime<Utc>,
}

#[derive(FromRow)]
struct CredentialRow {
    #[sqlx(flatten)]
    account: AccountRow,
    password_hash: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let username = Username::parse(&row.username)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let email = row
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let profile = Profile::new(row.first_name, row.last_name, email)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(Account::restore(
            AccountId::from(row.id),
            username,
            profile,
            row.date_joined,
        ))
    }
}

const ACCOUNT_COLUMNS: &str = "id, username, first_name, last_name, email, date_joined";

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, new_account: NewAccount) -> Result<Account, AccountStoreError> {
        let password_hash = compute_password_hash(new_account.password)
            .await
            .map_err(AccountStoreError::UnexpectedError)?;
        let account = Account::new(new_account.username, new_account.profile);
        let profile = account.profile();

        let query = sqlx::query(
            r#"
                INSERT INTO accounts
                    (id, username, password_hash, first_name, last_name, email, date_joined)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*account.id().as_uuid())
        .bind(account.username().as_str())
        .bind(password_hash.expose_secret())
        .bind(profile.first_name())
        .bind(profile.last_name())
        .bind(profile.email().map(Email::as_str))
        .bind(account.date_joined());

        // The unique index on lower(username) is the only constraint an
        // insert can violate.
        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return AccountStoreError::UsernameTaken;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(account)
    }

    #[tracing::instrument(name = "Validating account credentials in PostgreSQL", skip_all)]
    async fn authenticate(
        &self,
        username: &str,
        password: &Password,
    ) -> Result<Account, AccountStoreError> {
        let row: Option<CredentialRow> = sqlx::query_as(&format!(
            "SELECT {ACCOUNT_COLUMNS}, password_hash FROM accounts WHERE lower(username) = lower($1)"
        ))
        .bind(username.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            verify_dummy_password_hash(password.clone())
                .await
                .map_err(AccountStoreError::UnexpectedError)?;
            return Err(AccountStoreError::AccountNotFound);
        };

        let matches = verify_password_hash(Secret::from(row.password_hash), password.clone())
            .await
            .map_err(AccountStoreError::UnexpectedError)?;
        if !matches {
            return Err(AccountStoreError::IncorrectPassword);
        }

        Account::try_from(row.account)
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let row: Option<AccountRow> =
            sqlx::query_as(&format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"))
                .bind(*id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.ok_or(AccountStoreError::AccountNotFound)
            .and_then(Account::try_from)
    }

    #[tracing::instrument(name = "Updating account profile in PostgreSQL", skip_all)]
    async fn update_profile(
        &self,
        id: AccountId,
        profile: Profile,
    ) -> Result<Account, AccountStoreError> {
        let row: Option<AccountRow> = sqlx::query_as(&format!(
            r#"
                UPDATE accounts
                SET first_name = $1, last_name = $2, email = $3
                WHERE id = $4
                RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(profile.first_name())
        .bind(profile.last_name())
        .bind(profile.email().map(Email::as_str))
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.ok_or(AccountStoreError::AccountNotFound)
            .and_then(Account::try_from)
    }

    #[tracing::instrument(name = "Delete account from PostgreSQL", skip_all)]
    async fn delete_account(&self, id: AccountId) -> Result<(), AccountStoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }
}
