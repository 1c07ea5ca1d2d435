use serde::{Deserialize, Serialize};

/// A stored URL mapping.
///
/// Records are created once at first shortening of a given original URL
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Generated short identifier, unique across the store.
    pub id: String,
    /// The original URL that was shortened, unique across the store.
    pub original: String,
    /// Public short URL, derived from the base URL and the id.
    pub short: String,
}

impl UrlRecord {
    /// Builds a record, deriving the short URL from the base URL and id.
    pub fn new(id: impl Into<String>, original: impl Into<String>, base_url: &str) -> Self {
        let id = id.into();
        let short = format!("{}/{}", base_url.trim_end_matches('/'), id);
        Self {
            id,
            original: original.into(),
            short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_short_url() {
        let record = UrlRecord::new("abc123defg", "https://example.com", "http://localhost:8080");
        assert_eq!(record.short, "http://localhost:8080/abc123defg");
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let record = UrlRecord::new("abc", "https://example.com", "http://localhost:8080/");
        assert_eq!(record.short, "http://localhost:8080/abc");
    }

    #[test]
    fn serializes_with_expected_field_names() {
        let record = UrlRecord::new("abc", "https://example.com", "http://localhost:8080");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["original"], "https://example.com");
        assert_eq!(json["short"], "http://localhost:8080/abc");
    }
}
