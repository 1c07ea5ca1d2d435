use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use shortwave_core::error::StoreResult;
use shortwave_core::{StoreError, UrlRecord, UrlStore};

use crate::index::Indexes;

/// Durable implementation of [`UrlStore`] backed by a flat JSON file.
///
/// The in-memory indexes are the source of truth for reads; every
/// successful create synchronously rewrites the whole file. A failed
/// write rolls the insertion back, so the store never diverges from the
/// last successfully persisted file.
#[derive(Debug)]
pub struct FileStore {
    indexes: RwLock<Indexes>,
    path: PathBuf,
}

impl FileStore {
    /// Opens a file-backed store, rehydrating the indexes from `path`.
    ///
    /// An absent or empty file yields an empty store. A file that exists
    /// but cannot be parsed fails with [`StoreError::CorruptStore`];
    /// silently starting empty would mask data loss.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let indexes = Self::load(&path)?;
        Ok(Self {
            indexes: RwLock::new(indexes),
            path,
        })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StoreResult<Indexes> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Indexes::default()),
            Err(e) => return Err(StoreError::Persistence(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Indexes::default());
        }

        let records: Vec<UrlRecord> = serde_json::from_str(&content)
            .map_err(|e| StoreError::CorruptStore(e.to_string()))?;

        let mut indexes = Indexes::default();
        for record in records {
            // Duplicate ids or originals in the file violate the store
            // invariants, so the file counts as corrupt.
            indexes
                .insert(record)
                .map_err(|e| StoreError::CorruptStore(e.to_string()))?;
        }
        Ok(indexes)
    }

    /// Rewrites the whole record set to the backing file.
    ///
    /// Writes go through a temp file renamed into place, so a reader of
    /// the file never observes a partial write.
    fn persist(&self, indexes: &Indexes) -> StoreResult<()> {
        let mut records: Vec<&UrlRecord> = indexes.records().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));

        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| StoreError::Persistence(e.to_string()))?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Persistence(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Indexes>> {
        self.indexes.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Indexes>> {
        self.indexes.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl UrlStore for FileStore {
    async fn create(&self, record: UrlRecord) -> StoreResult<()> {
        let mut indexes = self.write()?;
        indexes.insert(record.clone())?;

        if let Err(e) = self.persist(&indexes) {
            // Roll back so memory stays consistent with the file.
            indexes.remove(&record);
            return Err(e);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UrlRecord>> {
        Ok(self.read()?.get_by_id(id).cloned())
    }

    async fn find_by_original(&self, original: &str) -> StoreResult<Option<UrlRecord>> {
        Ok(self.read()?.get_by_original(original).cloned())
    }
}
