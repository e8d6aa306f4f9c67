//! In-memory store doubles shared by the use case tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use keystone_core::{
    Account, AccountId, AccountStore, AccountStoreError, NewAccount, Password, Profile,
    SessionId, SessionStore, SessionStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

/// Store calls in the order they happened, across both stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    AccountAdded(AccountId),
    AccountDeleted(AccountId),
    SessionCreated(SessionId),
    SessionDeleted(SessionId),
}

pub type EventLog = Arc<RwLock<Vec<StoreEvent>>>;

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, (Account, String)>>>,
    pub events: EventLog,
    pub fail: bool,
}

impl MockAccountStore {
    pub fn with_events(events: EventLog) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub async fn seed(&self, username: &str, password: &str) -> Account {
        let account = Account::new(Username::parse(username).unwrap(), Profile::default());
        self.accounts
            .write()
            .await
            .insert(account.id(), (account.clone(), password.to_string()));
        account
    }

    pub async fn contains(&self, id: AccountId) -> bool {
        self.accounts.read().await.contains_key(&id)
    }

    fn check_failure(&self) -> Result<(), AccountStoreError> {
        if self.fail {
            return Err(AccountStoreError::UnexpectedError("store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn add_account(&self, new_account: NewAccount) -> Result<Account, AccountStoreError> {
        self.check_failure()?;
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|(account, _)| account.username().matches(new_account.username.as_str()))
        {
            return Err(AccountStoreError::UsernameTaken);
        }
        let account = Account::new(new_account.username, new_account.profile);
        let password = new_account.password.as_ref().expose_secret().clone();
        accounts.insert(account.id(), (account.clone(), password));
        self.events
            .write()
            .await
            .push(StoreEvent::AccountAdded(account.id()));
        Ok(account)
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &Password,
    ) -> Result<Account, AccountStoreError> {
        self.check_failure()?;
        let accounts = self.accounts.read().await;
        let (account, stored) = accounts
            .values()
            .find(|(account, _)| account.username().matches(username))
            .ok_or(AccountStoreError::AccountNotFound)?;
        if stored != password.as_ref().expose_secret() {
            return Err(AccountStoreError::IncorrectPassword);
        }
        Ok(account.clone())
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        self.check_failure()?;
        self.accounts
            .read()
            .await
            .get(&id)
            .map(|(account, _)| account.clone())
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update_profile(
        &self,
        id: AccountId,
        profile: Profile,
    ) -> Result<Account, AccountStoreError> {
        self.check_failure()?;
        let mut accounts = self.accounts.write().await;
        let (account, _) = accounts
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        *account = account.clone().with_profile(profile);
        Ok(account.clone())
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), AccountStoreError> {
        self.check_failure()?;
        self.accounts
            .write()
            .await
            .remove(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        self.events
            .write()
            .await
            .push(StoreEvent::AccountDeleted(id));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, AccountId>>>,
    pub events: EventLog,
    pub fail: bool,
}

impl MockSessionStore {
    pub fn with_events(events: EventLog) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    pub async fn insert(&self, session_id: SessionId, account_id: AccountId) {
        self.sessions.write().await.insert(session_id, account_id);
    }

    pub async fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn create_session(&self, account_id: AccountId) -> Result<SessionId, SessionStoreError> {
        if self.fail {
            return Err(SessionStoreError::UnexpectedError("store offline".to_string()));
        }
        let session_id = SessionId::new();
        self.sessions.write().await.insert(session_id, account_id);
        self.events
            .write()
            .await
            .push(StoreEvent::SessionCreated(session_id));
        Ok(session_id)
    }

    async fn get_account_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AccountId>, SessionStoreError> {
        Ok(self.sessions.read().await.get(session_id).copied())
    }

    async fn delete_session(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(session_id);
        self.events
            .write()
            .await
            .push(StoreEvent::SessionDeleted(*session_id));
        Ok(())
    }
}

pub fn password(raw: &str) -> Password {
    Password::parse(Secret::new(raw.to_string())).unwrap()
}
