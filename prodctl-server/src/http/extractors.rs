//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::{ApiError, INVALID_PAYLOAD, INVALID_PRODUCT_ID};
use crate::models::ProductPayload;

/// Extract a numeric product id from the `{id}` path segment.
///
/// Rejects with "Invalid product ID". Handlers that need a different message
/// take `Result<ProductId, ApiError>` and remap.
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest(INVALID_PRODUCT_ID))?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::BadRequest(INVALID_PRODUCT_ID))
    }
}

/// Decode the request body as a product, whatever the Content-Type says.
pub struct ProductBody(pub ProductPayload);

impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest(INVALID_PAYLOAD))?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| {
                tracing::debug!("rejecting product body: {}", e);
                ApiError::BadRequest(INVALID_PAYLOAD)
            })
    }
}
