use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use models::cart::{Cart, CartItem};

/// Trait abstraction for cart storage.
#[async_trait]
pub trait CartCatalog: Send + Sync {
    async fn create_cart(&self) -> Result<Cart, ServiceError>;
    async fn cart_products(&self, cart_id: Uuid) -> Result<Option<Vec<CartItem>>, ServiceError>;
    async fn add_product(
        &self,
        cart_id: Uuid,
        product_id: u64,
        quantity: i64,
    ) -> Result<Option<Vec<CartItem>>, ServiceError>;
}
