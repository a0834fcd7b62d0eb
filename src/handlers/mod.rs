//! HTTP request handlers

mod todos;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::AppState;

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(todos::create_todo))
        .route("/getall", get(todos::get_todos))
        .route("/update", put(todos::update_todo))
        .route("/delete", delete(todos::delete_todo))
        .route("/getbyid", get(todos::get_todo_by_id))
        .route("/getbycompleted", get(todos::get_completed_todos))
}
