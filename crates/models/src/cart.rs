use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One `(product id, quantity)` entry inside a cart. The product id is not
/// checked against the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub id: u64,
    pub quantity: i64,
}

/// A shopping cart: an id plus line items in the order first added.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    pub id: Uuid,
    pub products: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: Uuid) -> Self {
        Self { id, products: Vec::new() }
    }

    /// Add a product to the cart. At most one line item exists per product
    /// id: an already-present product has its quantity incremented instead
    /// of a duplicate entry being appended.
    pub fn add_item(&mut self, product_id: u64, quantity: i64) {
        match self.products.iter_mut().find(|item| item.id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.products.push(CartItem { id: product_id, quantity }),
        }
    }
}
