use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use keystone_adapters::{
    HashMapAccountStore, HashMapSessionStore, PostgresAccountStore, RedisSessionStore,
    config::{KeystoneSettings, SessionBackend, StorageBackend},
};
use keystone_axum::{AppState, cookie_key_from_settings};
use keystone_core::{AccountStore, SessionStore};
use keystone_service::{
    AccountsService,
    helpers::{configure_postgresql, configure_redis},
};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = KeystoneSettings::load()?;

    match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory account storage, accounts are lost on restart");
            with_session_store(HashMapAccountStore::new(), settings).await
        }
        StorageBackend::Postgres => {
            let url = settings
                .storage
                .url
                .as_ref()
                .ok_or_else(|| eyre!("storage.url is required for the postgres backend"))?;
            let pg_pool =
                configure_postgresql(url.expose_secret(), settings.storage.max_connections).await?;
            with_session_store(PostgresAccountStore::new(pg_pool), settings).await
        }
    }
}

async fn with_session_store<A>(accounts: A, settings: KeystoneSettings) -> Result<()>
where
    A: AccountStore + 'static,
{
    match settings.sessions.backend {
        SessionBackend::Memory => {
            let sessions = HashMapSessionStore::new(settings.session.ttl());
            serve(accounts, sessions, settings).await
        }
        SessionBackend::Redis => {
            let redis_conn = configure_redis(&settings.sessions.redis_host_name)?;
            let sessions = RedisSessionStore::new(
                Arc::new(RwLock::new(redis_conn)),
                settings.session.ttl_in_seconds,
            );
            serve(accounts, sessions, settings).await
        }
    }
}

async fn serve<A, S>(accounts: A, sessions: S, settings: KeystoneSettings) -> Result<()>
where
    A: AccountStore + 'static,
    S: SessionStore + 'static,
{
    let cookie_key = cookie_key_from_settings(&settings.session).map_err(|e| eyre!(e))?;

    let state = AppState::new(
        accounts,
        sessions,
        cookie_key,
        settings.session.cookies(),
        settings.password.policy(),
    );
    let service = AccountsService::new(state, &settings.application.assets_dir);

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting keystone account pages...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
