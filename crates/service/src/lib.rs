//! Storage layer for the catalog and cart services.
//! - Separates file persistence from the HTTP surface.
//! - Reuses the data types in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod storage;
pub mod shop;
pub mod file;
