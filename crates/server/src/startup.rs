use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::Services;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file wins when present; otherwise everything comes from env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{}: {}", path, e)))
    } else {
        info!(%path, "config file not found, reading SERVER_HOST/SERVER_PORT/DATABASE_URL");
        AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
    }
}

fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.host, cfg.port);
    raw.parse().map_err(|_| StartupError::BindAddr(raw))
}

/// Router over the given services, with CORS and request tracing.
pub fn app(services: Services) -> Router {
    routes::build_router(ServerState::new(services), build_cors())
}

/// Connect, migrate when enabled, and serve until the listener fails.
/// Expects `.env` and logging to be set up by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // DB connection
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "schema up to date");
    }

    let router = app(Services::seaorm(db));

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting student management server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
