//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed list store shared by the product and
//! cart stores.

pub mod json_list_store;
