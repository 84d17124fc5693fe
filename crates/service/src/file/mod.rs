pub mod product_store;
pub mod cart_store;
