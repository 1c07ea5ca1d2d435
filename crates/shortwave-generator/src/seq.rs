use std::sync::atomic::{AtomicU64, Ordering};

use crate::{GeneratorError, IdGenerator};

/// A deterministic sequential id generator.
///
/// Produces ids like "sw000000", "sw000001", and so on. Intended for
/// tests that need predictable ids; production code uses
/// [`RandomIdGenerator`](crate::random::RandomIdGenerator).
#[derive(Debug)]
pub struct SeqIdGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqIdGenerator {
    /// Creates a sequential generator with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            prefix: prefix.into(),
        }
    }

    /// Creates a sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl IdGenerator for SeqIdGenerator {
    fn generate(&self) -> Result<String, GeneratorError> {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}{:06}", self.prefix, count))
    }
}
