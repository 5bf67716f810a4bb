use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

pub const MISSING_NAME: &str = "Missing required field 'name'";
pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const SAVE_FAILED: &str = "Error saving item";
pub const READ_FAILED: &str = "Error reading item";

/// Custom error type for API endpoints
///
/// Every variant renders as a plain-text body. Store failures are logged
/// with their underlying cause but only a generic message reaches the client.
#[derive(Debug)]
pub enum ApiError {
    /// `name` absent, null or empty
    MissingName,
    /// Request body could not be parsed
    InvalidBody(String),
    /// No item stored under the id
    ItemNotFound(String),
    /// Store read or write failed
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingName => (StatusCode::BAD_REQUEST, MISSING_NAME.to_string()),
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", msg),
            ),
            ApiError::ItemNotFound(id) => {
                tracing::debug!("No item stored under id: {}", id);
                (StatusCode::NOT_FOUND, ITEM_NOT_FOUND.to_string())
            }
            ApiError::Store(err) => {
                tracing::error!("{}", err);
                let message = match err {
                    StoreError::Write { .. } => SAVE_FAILED,
                    StoreError::Read { .. } => READ_FAILED,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
