use std::sync::Arc;

use server::config::Config;
use server::store::{MemoryStore, SharedStore, SqliteStore};

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let store: SharedStore = match &config.state_db {
        Some(url) => {
            tracing::info!("Opening game store at {url}");
            Arc::new(
                SqliteStore::connect(url)
                    .await
                    .expect("Failed to open game store"),
            )
        }
        None => {
            tracing::info!("STATE_DB not set - games are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let app = server::build_router(&config, store);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
