//! API error types with IntoResponse
//!
//! Every failure becomes a JSON body with a single `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::StoreError;
use crate::models::ValidationError;

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const INVALID_DELETE_ID: &str = "ID not valid";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Unparseable path id or request body (400)
    BadRequest(&'static str),

    /// Body decoded but breaks a product invariant (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound(&'static str),

    /// Storage failure (500, logged, message passed through)
    Storage(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.to_owned(),
            Self::Validation(e) => e.to_string(),
            Self::Storage(e) => {
                tracing::error!("Database error: {}", e);
                e.to_string()
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound(PRODUCT_NOT_FOUND),
            _ => Self::Storage(e),
        }
    }
}
