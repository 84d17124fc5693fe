use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::ServiceError;
use models::product::Product;

/// Trait abstraction for product catalog storage.
/// Implementations can be file-backed, database-backed, or in-memory.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Product>, ServiceError>;
    async fn get(&self, id: u64) -> Result<Option<Product>, ServiceError>;
    async fn create(&self, fields: Map<String, Value>) -> Result<Product, ServiceError>;
    async fn update(&self, id: u64, patch: Map<String, Value>)
        -> Result<Option<Product>, ServiceError>;
    async fn delete(&self, id: u64) -> Result<Option<Product>, ServiceError>;
}
