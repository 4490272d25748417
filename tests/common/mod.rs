use std::sync::Arc;

use reqwest::Client;
use server::config::Config;
use server::store::{MemoryStore, SharedStore};

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Boot the real router on an ephemeral port with an in-memory store and
/// return its base URL.
pub async fn spawn_server() -> String {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        public_dir: "public".to_string(),
        state_db: None,
        ai_depth: 2,
    };
    let store: SharedStore = Arc::new(MemoryStore::new());
    let app = server::build_router(&config, store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{addr}")
}
