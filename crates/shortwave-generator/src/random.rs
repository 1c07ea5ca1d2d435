use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::TryRngCore;
use typed_builder::TypedBuilder;

use crate::{GeneratorError, IdGenerator};

/// Default id length in characters.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Generates fixed-length, unpredictable, URL-safe identifiers.
///
/// Each call draws fresh bytes from the OS entropy source and encodes
/// them as unpadded URL-safe base64, truncated to the configured length,
/// so every character is safe unescaped in a URL path segment. No state
/// is kept between calls.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomIdGenerator {
    #[builder(default = DEFAULT_ID_LENGTH)]
    length: usize,
}

impl RandomIdGenerator {
    /// Creates a generator with the default id length.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// The length of generated ids, in characters.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Result<String, GeneratorError> {
        // base64 expands 3 bytes to 4 characters, so `length` bytes always
        // encode to at least `length` characters.
        let mut bytes = vec![0u8; self.length];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| GeneratorError::Entropy(e.to_string()))?;

        let mut id = URL_SAFE_NO_PAD.encode(&bytes);
        id.truncate(self.length);
        Ok(id)
    }
}
