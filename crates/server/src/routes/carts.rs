use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use models::cart::{Cart, CartItem};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct AddItemBody {
    pub quantity: Option<i64>,
}

#[utoipa::path(
    post, path = "/api/carts", tag = "carts",
    responses(
        (status = 200, description = "New empty cart"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn create_cart(State(state): State<ServerState>) -> Result<Json<Cart>, ApiError> {
    let store = state.carts.clone();
    let cart = store.create_cart().await?;
    Ok(Json(cart))
}

#[utoipa::path(
    get, path = "/api/carts/{cid}", tag = "carts",
    params(("cid" = Uuid, Path, description = "Cart id")),
    responses(
        (status = 200, description = "Line items of the cart"),
        (status = 404, description = "No cart with that id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn get_cart_products(
    State(state): State<ServerState>,
    Path(cid): Path<Uuid>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let store = state.carts.clone();
    match store.cart_products(cid).await? {
        Some(products) => Ok(Json(products)),
        None => Err(ApiError::NotFound("cart")),
    }
}

/// The request body is optional; a missing body or missing `quantity`
/// defaults to 1.
#[utoipa::path(
    post, path = "/api/carts/{cid}/product/{pid}", tag = "carts",
    params(
        ("cid" = Uuid, Path, description = "Cart id"),
        ("pid" = u64, Path, description = "Product id"),
    ),
    request_body = crate::openapi::AddItemBodyDoc,
    responses(
        (status = 200, description = "Updated line items of the cart"),
        (status = 404, description = "No cart with that id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn add_product_to_cart(
    State(state): State<ServerState>,
    Path((cid, pid)): Path<(Uuid, u64)>,
    body: Option<Json<AddItemBody>>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let quantity = body.and_then(|Json(b)| b.quantity).unwrap_or(1);
    let store = state.carts.clone();
    match store.add_product(cid, pid, quantity).await? {
        Some(products) => Ok(Json(products)),
        None => Err(ApiError::NotFound("cart")),
    }
}
