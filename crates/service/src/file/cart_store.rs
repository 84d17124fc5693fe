use std::sync::Arc;

use uuid::Uuid;

use crate::errors::ServiceError;
use crate::shop::cart_catalog::CartCatalog;
use crate::storage::json_list_store::JsonListStore;
use models::cart::{Cart, CartItem};

/// File storage: persists the cart list as one JSON array. Cart ids are
/// random UUIDs; line items live nested inside each cart record.
pub struct CartStore {
    store: Arc<JsonListStore<Cart>>,
}

impl CartStore {
    /// Initialize the store, creating an empty file when missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<Cart>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// Append a new empty cart and persist.
    pub async fn create_cart(&self) -> Result<Cart, ServiceError> {
        let created = self
            .store
            .mutate(|carts| {
                let cart = Cart::new(Uuid::new_v4());
                carts.push(cart.clone());
                Some(cart)
            })
            .await?;
        Ok(created.expect("create commits"))
    }

    /// Line items of the cart with the given id, or `None` when no cart
    /// matches.
    pub async fn cart_products(&self, cart_id: Uuid) -> Result<Option<Vec<CartItem>>, ServiceError> {
        let carts = self.store.read().await?;
        Ok(carts.into_iter().find(|c| c.id == cart_id).map(|c| c.products))
    }

    /// Add a product to a cart and persist the whole cart list. A product
    /// already in the cart has its quantity incremented by `quantity`;
    /// otherwise a new line item is appended. The product id is not checked
    /// against the catalog, and the quantity is taken as given. Returns the
    /// cart's updated line items, or `None` (no write) when the cart is
    /// absent.
    pub async fn add_product(
        &self,
        cart_id: Uuid,
        product_id: u64,
        quantity: i64,
    ) -> Result<Option<Vec<CartItem>>, ServiceError> {
        self.store
            .mutate(|carts| {
                let cart = carts.iter_mut().find(|c| c.id == cart_id)?;
                cart.add_item(product_id, quantity);
                Some(cart.products.clone())
            })
            .await
    }
}

#[async_trait::async_trait]
impl CartCatalog for CartStore {
    async fn create_cart(&self) -> Result<Cart, ServiceError> {
        self.create_cart().await
    }
    async fn cart_products(&self, cart_id: Uuid) -> Result<Option<Vec<CartItem>>, ServiceError> {
        self.cart_products(cart_id).await
    }
    async fn add_product(
        &self,
        cart_id: Uuid,
        product_id: u64,
        quantity: i64,
    ) -> Result<Option<Vec<CartItem>>, ServiceError> {
        self.add_product(cart_id, product_id, quantity).await
    }
}
