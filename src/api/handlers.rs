//! API handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::{Error, Result};
use crate::types::ProductId;

/// Health check with catalog size
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products: state.catalog.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub products: usize,
}

/// List every product in catalog order
pub async fn list_products(State(state): State<AppState>) -> Result<Response> {
    let products = state.catalog.all();
    tracing::debug!(count = products.len(), "Listing products");

    Ok(Json(products).into_response())
}

/// Fetch a single product
///
/// A non-integer id never reaches this handler; the `Path` extractor rejects
/// it with 400.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Response> {
    let product = state
        .catalog
        .find(id)
        .ok_or(Error::ProductNotFound(id))?;
    tracing::debug!(product_id = id, "Found product");

    Ok(Json(product).into_response())
}
