//! Todo handlers - create, read, update, delete

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateTodoRequest, NewTodo, Todo};
use crate::AppState;

/// Query pairs for the single-todo endpoints (`?id=43`)
type IdQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// First `id` value in the query, parsed as an integer
fn parse_id(query: IdQuery) -> ApiResult<i64> {
    let Query(pairs) = query.map_err(|_| ApiError::InvalidId)?;
    pairs
        .iter()
        .find(|(key, _)| key == "id")
        .and_then(|(_, id)| id.parse().ok())
        .ok_or(ApiError::InvalidId)
}

/// Decode a JSON body without requiring a content type
fn decode<T: serde::de::DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("rejected body: {}", e);
        ApiError::InvalidPayload
    })
}

/// Create a todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let new_todo = NewTodo::from(decode::<CreateTodoRequest>(&body)?);

    let todo = state.db.create_todo(&new_todo)?;
    tracing::debug!("created todo {}", todo.id);

    Ok((StatusCode::CREATED, Json(todo)))
}

/// List every todo
pub async fn get_todos(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(state.db.get_todos()?))
}

/// Get one todo by `?id=`
pub async fn get_todo_by_id(
    State(state): State<Arc<AppState>>,
    query: IdQuery,
) -> ApiResult<Json<Todo>> {
    let id = parse_id(query)?;

    match state.db.get_todo_by_id(id)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound("Todo not found")),
    }
}

/// List finished todos
pub async fn get_completed_todos(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(state.db.get_completed_todos()?))
}

/// Update a todo. Echoes the submitted todo rather than re-reading the row.
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<Todo>> {
    let todo: Todo = decode(&body)?;

    if !state.db.update_todo(&todo)? {
        return Err(ApiError::NotFound("Todo id requested not found"));
    }
    tracing::debug!("updated todo {}", todo.id);

    Ok(Json(todo))
}

/// Delete a todo by `?id=`
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    query: IdQuery,
) -> ApiResult<StatusCode> {
    let id = parse_id(query)?;

    if !state.db.delete_todo(id)? {
        return Err(ApiError::NotFound("Todo id requested not found"));
    }
    tracing::debug!("deleted todo {}", id);

    Ok(StatusCode::NO_CONTENT)
}
