use std::sync::Arc;

use async_trait::async_trait;
use shortwave_core::{ShortenError, Shortener, StoreError, UrlRecord, UrlStore};
use shortwave_generator::IdGenerator;

type Result<T> = std::result::Result<T, ShortenError>;

/// Upper bound on id generation attempts per shorten call.
///
/// With 10 random characters a collision is vanishingly rare, but the
/// check-and-retry loop is a correctness guard, not an optimization:
/// uniqueness is never assumed by construction.
const MAX_GENERATION_ATTEMPTS: usize = 64;

/// A concrete implementation of the [`Shortener`] trait.
///
/// Wraps a [`UrlStore`] and an [`IdGenerator`]; the base URL for short
/// links is passed at construction, never read from ambient state.
#[derive(Debug, Clone)]
pub struct UrlService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    base_url: String,
}

impl<S: UrlStore, G: IdGenerator> UrlService<S, G> {
    /// Creates a new service over the given store and generator.
    pub fn new(store: S, generator: G, base_url: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            base_url: base_url.into(),
        }
    }

    /// Picks a generated id that is not yet present in the store.
    ///
    /// Lookup failures propagate; a storage error must never be read as
    /// "this id is free".
    async fn next_free_id(&self) -> Result<String> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let id = self
                .generator
                .generate()
                .map_err(|e| ShortenError::IdGeneration(e.to_string()))?;

            if self.store.find_by_id(&id).await?.is_none() {
                return Ok(id);
            }
        }

        Err(ShortenError::IdGeneration(format!(
            "no unused id found after {MAX_GENERATION_ATTEMPTS} attempts"
        )))
    }
}

#[async_trait]
impl<S: UrlStore, G: IdGenerator> Shortener for UrlService<S, G> {
    async fn shorten_url(&self, original: &str) -> Result<UrlRecord> {
        if let Some(existing) = self.store.find_by_original(original).await? {
            return Ok(existing);
        }

        let id = self.next_free_id().await?;
        let record = UrlRecord::new(id, original, &self.base_url);

        match self.store.create(record.clone()).await {
            Ok(()) => Ok(record),
            // A concurrent caller shortened the same URL between our
            // lookup and the create; their record wins.
            Err(StoreError::DuplicateOriginal(_)) => {
                match self.store.find_by_original(original).await? {
                    Some(existing) => Ok(existing),
                    None => Err(StoreError::DuplicateOriginal(original.to_owned()).into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_original_url(&self, id: &str) -> Result<Option<String>> {
        Ok(self.store.find_by_id(id).await?.map(|record| record.original))
    }
}
