use crate::error::ShortenError;
use crate::record::UrlRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenError>;

/// The shortening service surface consumed by the boundary layer.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL, returning the stored record.
    ///
    /// Re-shortening the same original URL is idempotent: it returns the
    /// existing record and never creates a second one. The input is
    /// assumed non-empty and already validated by the caller.
    async fn shorten_url(&self, original: &str) -> Result<UrlRecord>;

    /// Resolves a short id to its original URL.
    /// Returns `Ok(None)` if no record matches.
    async fn get_original_url(&self, id: &str) -> Result<Option<String>>;
}
