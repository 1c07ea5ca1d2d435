//! Short id generation for the Shortwave URL shortener.

pub mod random;
pub mod seq;

pub use random::RandomIdGenerator;
pub use seq::SeqIdGenerator;

use thiserror::Error;

/// Errors returned by id generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("entropy source failed: {0}")]
    Entropy(String),
}

/// Trait for producing short, URL-safe identifiers.
///
/// Implementations are pure generators that don't interact with storage.
/// Collision handling against already-stored ids is the caller's job; a
/// generator only promises that each output is drawn independently.
pub trait IdGenerator: Send + Sync + 'static {
    /// Produces the next candidate id.
    fn generate(&self) -> Result<String, GeneratorError>;
}
