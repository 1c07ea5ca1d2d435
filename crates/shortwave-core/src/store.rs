use crate::error::StoreResult;
use crate::record::UrlRecord;
use async_trait::async_trait;

/// A concurrency-safe store of URL records, indexed both by short id and
/// by original URL.
///
/// Implementations must update the two indexes atomically as observed by
/// readers: no caller may ever see a record through one index but not the
/// other.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Inserts a new record.
    ///
    /// Fails with [`StoreError::DuplicateOriginal`] if a record with the
    /// same original URL already exists, and with
    /// [`StoreError::DuplicateId`] if the id is already taken.
    ///
    /// [`StoreError::DuplicateOriginal`]: crate::error::StoreError::DuplicateOriginal
    /// [`StoreError::DuplicateId`]: crate::error::StoreError::DuplicateId
    async fn create(&self, record: UrlRecord) -> StoreResult<()>;

    /// Looks up a record by its short id.
    /// Returns `Ok(None)` if no record matches.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UrlRecord>>;

    /// Looks up a record by its original URL.
    /// Returns `Ok(None)` if no record matches.
    async fn find_by_original(&self, original: &str) -> StoreResult<Option<UrlRecord>>;
}
