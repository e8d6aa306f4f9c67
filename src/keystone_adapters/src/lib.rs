pub mod config;
pub mod handlers;
pub mod persistence;
pub mod views;

pub use persistence::{
    HashMapAccountStore, HashMapSessionStore, PostgresAccountStore, RedisSessionStore,
};
