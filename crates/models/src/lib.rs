//! Plain data types shared by the storage and HTTP layers.
//! - No persistence logic here; stores live in the `service` crate.
//! - Record manipulation that is pure (field merge, line-item merge) sits
//!   next to the types so it can be unit tested without touching disk.

pub mod product;
pub mod cart;
