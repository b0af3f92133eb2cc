//! Product endpoints
//!
//! Path and body problems are rejected with 400 before the store is touched.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::{ApiError, INVALID_DELETE_ID};
use crate::http::extractors::{ProductBody, ProductId};
use crate::http::state::AppState;
use crate::models::{PageParams, PageWindow, Product};

/// Delete acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub result: String,
}

/// GET /products?count=&start= - one page of products
async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let window = PageWindow::from(PageParams::from_pairs(&pairs));

    let products = state.store().fetch_page(window).await?;
    Ok(Json(products))
}

/// POST /product - create a product
async fn create_product(
    State(state): State<AppState>,
    ProductBody(payload): ProductBody,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = payload.validate()?;
    let product = state.store().insert(&draft).await?;

    tracing::info!(id = product.id, "created product");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /product/{id} - fetch a single product
async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = state.store().fetch_one(id).await?;
    Ok(Json(product))
}

/// PUT /product/{id} - replace name and price
///
/// Answers with the submitted values under the path id; the row's existence
/// is not checked.
async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ProductBody(payload): ProductBody,
) -> Result<Json<Product>, ApiError> {
    let draft = payload.validate()?;
    state.store().update(id, &draft).await?;

    Ok(Json(draft.with_id(id)))
}

/// DELETE /product/{id} - remove a product
async fn delete_product(
    State(state): State<AppState>,
    id: Result<ProductId, ApiError>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let ProductId(id) = id.map_err(|_| ApiError::BadRequest(INVALID_DELETE_ID))?;
    state.store().delete(id).await?;

    Ok(Json(DeleteResponse {
        result: "success".into(),
    }))
}

/// Product routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
