use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use models::product::Product;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Keep only the first `limit` products; non-positive values are
    /// ignored.
    pub limit: Option<i64>,
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    params(ListQuery),
    responses(
        (status = 200, description = "Product list"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn list_products(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let store = state.products.clone();
    let products = store.list(query.limit).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get, path = "/api/products/{pid}", tag = "products",
    params(("pid" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product"),
        (status = 404, description = "No product with that id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn get_product(
    State(state): State<ServerState>,
    Path(pid): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    let store = state.products.clone();
    match store.get(pid).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound("product")),
    }
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "Created product with assigned id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn create_product(
    State(state): State<ServerState>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Product>, ApiError> {
    let store = state.products.clone();
    let created = store.create(fields).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/products/{pid}", tag = "products",
    params(("pid" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Merged product"),
        (status = 404, description = "No product with that id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn update_product(
    State(state): State<ServerState>,
    Path(pid): Path<u64>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Product>, ApiError> {
    let store = state.products.clone();
    match store.update(pid, patch).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound("product")),
    }
}

#[utoipa::path(
    delete, path = "/api/products/{pid}", tag = "products",
    params(("pid" = u64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Removed product"),
        (status = 404, description = "No product with that id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn delete_product(
    State(state): State<ServerState>,
    Path(pid): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    let store = state.products.clone();
    match store.delete(pid).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound("product")),
    }
}
