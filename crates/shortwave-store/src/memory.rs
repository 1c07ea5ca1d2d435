use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use shortwave_core::error::StoreResult;
use shortwave_core::{StoreError, UrlRecord, UrlStore};

use crate::index::Indexes;

/// Volatile in-memory implementation of [`UrlStore`].
///
/// Records live only as long as the process; there is no persistence.
/// Both indexes sit behind one reader-writer lock, so readers run
/// concurrently with each other but never with a writer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    indexes: RwLock<Indexes>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Indexes>> {
        self.indexes.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Indexes>> {
        self.indexes.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn create(&self, record: UrlRecord) -> StoreResult<()> {
        self.write()?.insert(record)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UrlRecord>> {
        Ok(self.read()?.get_by_id(id).cloned())
    }

    async fn find_by_original(&self, original: &str) -> StoreResult<Option<UrlRecord>> {
        Ok(self.read()?.get_by_original(original).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn record(id: &str, original: &str) -> UrlRecord {
        UrlRecord::new(id, original, "http://localhost:8080")
    }

    #[tokio::test]
    async fn create_and_find() {
        let store = MemoryStore::new();
        let r = record("abc123defg", "https://example.com");
        store.create(r.clone()).await.unwrap();

        assert_eq!(store.find_by_id("abc123defg").await.unwrap(), Some(r.clone()));
        assert_eq!(
            store.find_by_original("https://example.com").await.unwrap(),
            Some(r)
        );
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = MemoryStore::new();

        assert_eq!(store.find_by_id("nope").await.unwrap(), None);
        assert_eq!(store.find_by_original("https://nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_original() {
        let store = MemoryStore::new();
        store
            .create(record("abc", "https://example.com"))
            .await
            .unwrap();

        let err = store
            .create(record("xyz", "https://example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateOriginal(_)));

        // The winning record is untouched.
        let existing = store.find_by_original("https://example.com").await.unwrap();
        assert_eq!(existing.unwrap().id, "abc");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let store = MemoryStore::new();
        store
            .create(record("abc", "https://example.com"))
            .await
            .unwrap();

        let err = store
            .create(record("abc", "https://other.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(store.find_by_original("https://other.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn concurrent_creates_land_in_both_indexes() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = vec![];

        for i in 0..32u32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let r = record(
                    &format!("id-{i:03}"),
                    &format!("https://example{i}.com"),
                );
                store.create(r).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..32u32 {
            let by_id = store.find_by_id(&format!("id-{i:03}")).await.unwrap();
            let by_original = store
                .find_by_original(&format!("https://example{i}.com"))
                .await
                .unwrap();
            assert_eq!(by_id, by_original);
            assert!(by_id.is_some());
        }
    }
}
