use std::sync::Arc;

use keystone_core::{AccountId, SessionId, SessionStore, SessionStoreError};
use redis::{Commands, Connection};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Creating session in Redis", skip_all)]
    async fn create_session(&self, account_id: AccountId) -> Result<SessionId, SessionStoreError> {
        let session_id = SessionId::new();
        let key = get_key(&session_id);

        let mut conn = self.conn.write().await;
        let _: () = conn
            .set_ex(key, account_id.to_string(), self.session_ttl)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        Ok(session_id)
    }

    #[tracing::instrument(name = "Retrieving session from Redis", skip_all)]
    async fn get_account_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<AccountId>, SessionStoreError> {
        let key = get_key(session_id);

        let mut conn = self.conn.write().await;
        let value: Option<String> = conn
            .get(&key)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        value
            .map(|raw| {
                Uuid::parse_str(&raw)
                    .map(AccountId::from)
                    .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))
            })
            .transpose()
    }

    #[tracing::instrument(name = "Deleting session from Redis", skip_all)]
    async fn delete_session(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        let key = get_key(session_id);

        let mut conn = self.conn.write().await;
        let _: () = conn
            .del(&key)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;
        Ok(())
    }
}

const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(session_id: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, session_id)
}
