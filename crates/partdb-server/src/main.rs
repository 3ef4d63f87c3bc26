use std::sync::Arc;

use partdb_auth::{Authenticator, MySqlUserStore, PasswordVerifier};
use partdb_core::Config;
use partdb_export::OutputEncoding;
use partdb_query::{InventorySource, MySqlInventorySource};
use partdb_server::{create_router, AppState};
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    // Reject a misconfigured encoding here, before anything is served.
    let encoding = OutputEncoding::from_label(&config.csv_encoding)?;

    // Lazy pool: connections are acquired per operation and a database
    // outage surfaces as a 500 on the affected request, not a crash.
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database_url)?;

    let authenticator: Arc<dyn Authenticator> = Arc::new(PasswordVerifier::new(Arc::new(
        MySqlUserStore::new(pool.clone()),
    )));
    let inventory: Arc<dyn InventorySource> = Arc::new(MySqlInventorySource::new(pool));

    let state = AppState::new(authenticator, inventory, config.base_url, encoding);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(address = %addr, "partdb-csv exporter listening");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
