use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by a [`UrlStore`](crate::store::UrlStore).
///
/// A missing record is not an error; lookups signal it as `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("original url already exists: {0}")]
    DuplicateOriginal(String),
    #[error("short id already exists: {0}")]
    DuplicateId(String),
    #[error("failed to persist store: {0}")]
    Persistence(String),
    #[error("store file is corrupt: {0}")]
    CorruptStore(String),
    #[error("store lock is poisoned")]
    LockPoisoned,
}

/// Errors raised by a [`Shortener`](crate::shortener::Shortener).
///
/// Store errors pass through the service unchanged; the boundary layer
/// is responsible for mapping them to user-visible responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenError {
    #[error("id generation failed: {0}")]
    IdGeneration(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
