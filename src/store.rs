//! Pool construction and `items` table DDL. Run once at startup; any error here is fatal.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub const MAX_CONNECTIONS: u32 = 10;
pub const MIN_CONNECTIONS: u32 = 0;
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);
pub const MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
/// Bound on the reachability check performed before serving.
pub const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(5);

const ITEMS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Pool options with the fixed bounds. No connection is opened yet.
pub fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(MIN_CONNECTIONS)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Build the pool lazily; connections are opened on first use.
pub fn connect(config: &DbConfig) -> PgPool {
    pool_options().connect_lazy_with(config.connect_options())
}

/// `SELECT 1` round trip. Shared by startup and the health check.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `items` table if absent. Safe to run on every start.
pub async fn ensure_items_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(ITEMS_DDL).execute(pool).await?;
    Ok(())
}

/// Connect, verify the store answers within [`STARTUP_PING_TIMEOUT`], then ensure the schema.
pub async fn bootstrap(config: &DbConfig) -> Result<PgPool, AppError> {
    tracing::info!(database = %config.redacted_url(), "connecting to database");
    let pool = connect(config);

    tokio::time::timeout(STARTUP_PING_TIMEOUT, ping(&pool))
        .await
        .map_err(|_| AppError::Timeout("database ping"))??;
    tracing::info!("database reachable");

    ensure_items_table(&pool).await?;
    tracing::info!("items table ready");
    Ok(pool)
}
