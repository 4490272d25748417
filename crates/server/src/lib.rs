//! Game session service: HTTP endpoints for creating games, reading state,
//! and applying moves, backed by an opaque key-value game store.

pub mod config;
pub mod error;
pub mod game_id;
pub mod record;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::game_id::GameIdGenerator;
use crate::store::SharedStore;

/// Build the application router with all routes and shared state attached.
///
/// Anything that is not an API route falls through to the static assets in
/// `config.public_dir`.
pub fn build_router(config: &Config, store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/new", get(routes::games::new_game))
        .route("/state", get(routes::games::get_state))
        .route("/move", get(routes::games::apply_move))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(Extension(store))
        .layer(Extension(Arc::new(GameIdGenerator::new())))
        .layer(Extension(config.clone()))
        .layer(cors)
}
