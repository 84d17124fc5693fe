use std::{marker::PhantomData, path::PathBuf, sync::Arc};
use tokio::fs;

use crate::errors::ServiceError;

/// Generic JSON file-backed list store.
///
/// Persists a `Vec<T>` as a top-level JSON array in one file. The file is
/// the only state: every call re-reads it from disk, so the next request
/// always observes prior writes. Intended for small datasets where a
/// database is overkill.
pub struct JsonListStore<T> {
    file_path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Initialize the store from a path. Creates the file with an empty
    /// array if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        if fs::metadata(&file_path).await.is_err() {
            let empty: Vec<T> = Vec::new();
            let data = serde_json::to_vec(&empty)
                .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
            fs::write(&file_path, data)
                .await
                .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
        }

        Ok(Arc::new(Self { file_path, _record: PhantomData }))
    }

    /// Read and parse the whole backing file.
    pub async fn read(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::StorageRead(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::StorageRead(e.to_string()))
    }

    async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(records)
            .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
        Ok(())
    }

    /// Read-modify-write cycle against the whole file. The closure returns
    /// `Some(result)` to commit the mutated list and `None` to leave the
    /// file untouched (not-found paths perform no write). The cycle holds
    /// no lock; two concurrent writers to the same file can lose an update.
    pub async fn mutate<F, R>(&self, f: F) -> Result<Option<R>, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Option<R>,
    {
        let mut records = self.read().await?;
        match f(&mut records) {
            Some(result) => {
                self.save(&records).await?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn json_list_store_read_mutate_persists() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_list_store_{}.json", Uuid::new_v4()));
        let store = JsonListStore::<String>::new(&tmp).await?;

        // initially empty
        assert_eq!(store.read().await?.len(), 0);

        // commit a mutation
        let appended = store
            .mutate(|list| {
                list.push("a".to_string());
                list.push("b".to_string());
                Some(list.len())
            })
            .await?;
        assert_eq!(appended, Some(2));
        assert_eq!(store.read().await?, vec!["a".to_string(), "b".to_string()]);

        // a `None` from the closure leaves the file untouched
        let skipped: Option<()> = store
            .mutate(|list| {
                list.clear();
                None
            })
            .await?;
        assert_eq!(skipped, None);
        assert_eq!(store.read().await?.len(), 2);

        // reload from disk to ensure persistence
        let reloaded = JsonListStore::<String>::new(&tmp).await?;
        assert_eq!(reloaded.read().await?, vec!["a".to_string(), "b".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_surfaces_read_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_list_store_bad_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        let store = JsonListStore::<String>::new(&tmp).await?;

        let err = store.read().await.expect_err("parse failure");
        assert!(matches!(err, ServiceError::StorageRead(_)));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
