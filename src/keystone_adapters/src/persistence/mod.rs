pub mod hashmap_account_store;
pub mod hashmap_session_store;
pub mod password_hashing;
pub mod postgres_account_store;
pub mod redis_session_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use hashmap_session_store::HashMapSessionStore;
pub use postgres_account_store::PostgresAccountStore;
pub use redis_session_store::RedisSessionStore;
