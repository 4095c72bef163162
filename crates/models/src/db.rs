use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

pub use configs::DatabaseConfig;

use crate::errors::ModelError;

/// Idle timeout and lifetime for the single in-memory SQLite connection.
/// A recycled connection would open a fresh, empty database.
pub const IN_MEMORY_CONN_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Build connect options from config.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is pinned to exactly one connection that is never reaped.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONN_TTL)
            .max_lifetime(IN_MEMORY_CONN_TTL);
    } else {
        opts.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opts
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    cfg.validate().map_err(|e| ModelError::Config(e.to_string()))?;
    let db = Database::connect(connect_options(cfg)).await?;
    info!(backend = ?db.get_database_backend(), in_memory = cfg.is_in_memory(), "database connected");
    Ok(db)
}
