use std::sync::Arc;

use service::file::{cart_store::CartStore, product_store::ProductStore};

/// Shared handler state: one file-backed store per entity.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<ProductStore>,
    pub carts: Arc<CartStore>,
}
