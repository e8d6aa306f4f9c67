use redis::{Client, Connection, RedisResult};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to PostgreSQL and run all pending migrations
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound for the pool
pub async fn configure_postgresql(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(url, max_connections).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Open a connection to the Redis server at `redis_host_name`
pub fn configure_redis(redis_host_name: &str) -> RedisResult<Connection> {
    get_redis_client(redis_host_name)?.get_connection()
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Create a Redis client
pub fn get_redis_client(redis_host_name: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_host_name);
    redis::Client::open(redis_url)
}
