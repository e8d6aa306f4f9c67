use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use keystone_core::{
    Account, AccountId, AccountStore, AccountStoreError, NewAccount, Password, Profile,
};
use secrecy::{ExposeSecret, Secret};

use crate::persistence::password_hashing::{
    compute_password_hash, verify_dummy_password_hash, verify_password_hash,
};

struct StoredAccount {
    account: Account,
    password_hash: Secret<String>,
}

/// In-process account store for tests and local development.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, StoredAccount>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    #[tracing::instrument(name = "Adding account to HashMap", skip_all)]
    async fn add_account(&self, new_account: NewAccount) -> Result<Account, AccountStoreError> {
        let password_hash = compute_password_hash(new_account.password)
            .await
            .map_err(AccountStoreError::UnexpectedError)?;

        // The write lock makes the uniqueness check and the insert atomic.
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|stored| stored.account.username().matches(new_account.username.as_str()))
        {
            return Err(AccountStoreError::UsernameTaken);
        }

        let account = Account::new(new_account.username, new_account.profile);
        accounts.insert(
            account.id(),
            StoredAccount {
                account: account.clone(),
                password_hash,
            },
        );
        Ok(account)
    }

    #[tracing::instrument(name = "Validating account credentials in HashMap", skip_all)]
    async fn authenticate(
        &self,
        username: &str,
        password: &Password,
    ) -> Result<Account, AccountStoreError> {
        let found = {
            let accounts = self.accounts.read().await;
            accounts
                .values()
                .find(|stored| stored.account.username().matches(username))
                .map(|stored| {
                    (
                        stored.account.clone(),
                        Secret::new(stored.password_hash.expose_secret().clone()),
                    )
                })
        };

        let Some((account, password_hash)) = found else {
            verify_dummy_password_hash(password.clone())
                .await
                .map_err(AccountStoreError::UnexpectedError)?;
            return Err(AccountStoreError::AccountNotFound);
        };

        let matches = verify_password_hash(password_hash, password.clone())
            .await
            .map_err(AccountStoreError::UnexpectedError)?;
        if !matches {
            return Err(AccountStoreError::IncorrectPassword);
        }
        Ok(account)
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(&id)
            .map(|stored| stored.account.clone())
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update_profile(
        &self,
        id: AccountId,
        profile: Profile,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;

        stored.account = stored.account.clone().with_profile(profile);
        Ok(stored.account.clone())
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        Ok(())
    }
}
