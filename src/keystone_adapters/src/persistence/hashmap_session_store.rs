use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use keystone_core::{AccountId, SessionId, SessionStore, SessionStoreError};

#[derive(Debug, Clone, Copy)]
struct SessionEntry {
    account_id: AccountId,
    expires_at: Instant,
}

/// In-process session store. Expired entries are dropped when read and
/// swept whenever a new session is created.
#[derive(Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<DashMap<SessionId, SessionEntry>>,
    ttl: Duration,
}

impl HashMapSessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn create_session(&self, account_id: AccountId) -> Result<SessionId, SessionStoreError> {
        let now = Instant::now();
        self.sessions.retain(|_, entry| entry.expires_at > now);

        let session_id = SessionId::new();
        self.sessions.insert(
            session_id,
            SessionEntry {
                account_id,
                expires_at: now + self.ttl,
            },
        );
        Ok(session_id)
    }

    async fn get_account_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AccountId>, SessionStoreError> {
        let Some(entry) = self.sessions.get(session_id).map(|entry| *entry) else {
            return Ok(None);
        };

        if entry.expires_at <= Instant::now() {
            self.sessions.remove(session_id);
            return Ok(None);
        }
        Ok(Some(entry.account_id))
    }

    async fn delete_session(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.remove(session_id);
        Ok(())
    }
}
