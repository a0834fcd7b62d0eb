//! Request errors and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body did not decode as the expected todo shape
    #[error("Invalid request payload")]
    InvalidPayload,

    /// `id` query parameter missing or not an integer
    #[error("Invalid todo ID")]
    InvalidId,

    #[error("{0}")]
    NotFound(&'static str),

    /// Any failure from the store. The cause is logged, never sent to the client.
    #[error("Database error")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(e) = &self {
            tracing::error!("storage error: {:#}", e);
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
