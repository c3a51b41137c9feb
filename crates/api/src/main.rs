use std::sync::Arc;

use anyhow::Context;

use stockroom_api::app::services::{AppServices, DccSettings};
use stockroom_infra::{AppConfig, InventoryStore, SqliteInventoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store = Arc::new(
        SqliteInventoryStore::connect(&config.store)
            .await
            .with_context(|| format!("failed to open {}", config.store.database_url))?,
    );
    store
        .initialize()
        .await
        .context("failed to initialize inventory table")?;

    let services = Arc::new(AppServices::new(store.clone(), DccSettings::from(&config)));
    let app = stockroom_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(stockroom_api::shutdown::wait_for_shutdown())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("inventory store closed");

    Ok(())
}
