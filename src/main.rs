mod app;
mod config;
mod db;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::{DashboardConfig, StoreBackend};
use crate::db::{MemoryPriceStore, MySqlPriceStore, PriceStore};
use crate::logging::LoggingConfig;
use crate::services::catalog_cache::CatalogCache;
use crate::services::price_service::current_time;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())
        .context("failed to initialize logging")?;

    let config = DashboardConfig::from_env().context("invalid configuration")?;

    let store: Arc<dyn PriceStore> = match config.backend {
        StoreBackend::MySql => {
            tracing::info!(
                "Using MySQL price store {}@{}:{}/{} (table {})",
                config.database.user,
                config.database.host,
                config.database.port,
                config.database.name,
                config.table
            );
            Arc::new(MySqlPriceStore::new(&config.database, config.table.clone()))
        }
        StoreBackend::Demo => {
            tracing::info!("Using in-memory demo price store");
            Arc::new(MemoryPriceStore::demo(current_time()))
        }
    };

    let state = AppState {
        store,
        catalog: Arc::new(CatalogCache::new(config.catalog_ttl)),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Sunflower prices dashboard running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
