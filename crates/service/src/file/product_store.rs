use std::sync::Arc;

use serde_json::{Map, Value};

use crate::errors::ServiceError;
use crate::shop::product_catalog::ProductCatalog;
use crate::storage::json_list_store::JsonListStore;
use models::product::Product;

/// File storage: persists the product catalog as one JSON array.
pub struct ProductStore {
    store: Arc<JsonListStore<Product>>,
}

impl ProductStore {
    /// Initialize the store, creating an empty file when missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<Product>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// All products in stored order; a positive `limit` keeps only the
    /// first `limit` entries, anything else returns the full list.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Product>, ServiceError> {
        let mut products = self.store.read().await?;
        if let Some(limit) = limit {
            if limit > 0 {
                products.truncate(limit as usize);
            }
        }
        Ok(products)
    }

    /// Linear scan for the first record with a matching id.
    pub async fn get(&self, id: u64) -> Result<Option<Product>, ServiceError> {
        let products = self.store.read().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    /// Append a new record with a store-assigned id. The id follows the
    /// last element of the array (`last.id + 1`, `1` when empty), not the
    /// maximum of all ids: after an out-of-order write, or when the
    /// highest-id record was deleted last, the next id can collide with an
    /// existing one.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<Product, ServiceError> {
        let created = self
            .store
            .mutate(|products| {
                let next_id = products.last().map(|p| p.id).unwrap_or(0) + 1;
                let product = Product::from_fields(next_id, fields);
                products.push(product.clone());
                Some(product)
            })
            .await?;
        Ok(created.expect("create commits"))
    }

    /// Shallow-merge `patch` onto the record with the given id and persist.
    /// Returns the merged record, or `None` (no write) when the id is
    /// absent.
    pub async fn update(
        &self,
        id: u64,
        patch: Map<String, Value>,
    ) -> Result<Option<Product>, ServiceError> {
        self.store
            .mutate(|products| {
                let product = products.iter_mut().find(|p| p.id == id)?;
                product.merge(patch);
                Some(product.clone())
            })
            .await
    }

    /// Remove exactly the first record with a matching id and persist.
    /// Returns the removed record, or `None` (no write) when absent.
    pub async fn delete(&self, id: u64) -> Result<Option<Product>, ServiceError> {
        self.store
            .mutate(|products| {
                let index = products.iter().position(|p| p.id == id)?;
                Some(products.remove(index))
            })
            .await
    }
}

#[async_trait::async_trait]
impl ProductCatalog for ProductStore {
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Product>, ServiceError> {
        self.list(limit).await
    }
    async fn get(&self, id: u64) -> Result<Option<Product>, ServiceError> {
        self.get(id).await
    }
    async fn create(&self, fields: Map<String, Value>) -> Result<Product, ServiceError> {
        self.create(fields).await
    }
    async fn update(
        &self,
        id: u64,
        patch: Map<String, Value>,
    ) -> Result<Option<Product>, ServiceError> {
        self.update(id, patch).await
    }
    async fn delete(&self, id: u64) -> Result<Option<Product>, ServiceError> {
        self.delete(id).await
    }
}
