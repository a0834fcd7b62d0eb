//! Todo Server
//!
//! A small HTTP service for creating, reading, updating and deleting
//! todo items stored in a single SQLite table.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use app::AppState;
pub use config::Config;

/// Build the service router over shared state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
