//! API error type with IntoResponse
//!
//! Every failure reaches the client the same way: a 500 with a generic
//! JSON body. The cause only shows up in the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read or parsed as JSON
    MalformedBody(String),

    /// Store rejected or failed the operation
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::MalformedBody(reason) => tracing::error!("Malformed request body: {}", reason),
            Self::Database(e) => tracing::error!("Database error: {}", e),
        }

        let body = json!({
            "error": "internal_error",
            "message": "an internal error occurred"
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedBody(e.to_string())
    }
}
