use std::collections::HashMap;

use shortwave_core::error::StoreResult;
use shortwave_core::{StoreError, UrlRecord};

/// The by-id and by-original index pair.
///
/// Kept in one struct so both stores guard the pair under a single lock:
/// a reader can never observe one index updated without the other.
#[derive(Debug, Default)]
pub(crate) struct Indexes {
    by_id: HashMap<String, UrlRecord>,
    by_original: HashMap<String, String>,
}

impl Indexes {
    /// Inserts into both indexes, rejecting duplicates on either key.
    pub(crate) fn insert(&mut self, record: UrlRecord) -> StoreResult<()> {
        if self.by_original.contains_key(&record.original) {
            return Err(StoreError::DuplicateOriginal(record.original));
        }
        if self.by_id.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }

        self.by_original
            .insert(record.original.clone(), record.id.clone());
        self.by_id.insert(record.id.clone(), record);
        Ok(())
    }

    /// Removes a record from both indexes.
    pub(crate) fn remove(&mut self, record: &UrlRecord) {
        self.by_id.remove(&record.id);
        self.by_original.remove(&record.original);
    }

    pub(crate) fn get_by_id(&self, id: &str) -> Option<&UrlRecord> {
        self.by_id.get(id)
    }

    pub(crate) fn get_by_original(&self, original: &str) -> Option<&UrlRecord> {
        self.by_original
            .get(original)
            .and_then(|id| self.by_id.get(id))
    }

    pub(crate) fn records(&self) -> impl Iterator<Item = &UrlRecord> {
        self.by_id.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }
}
