//! Core types and traits for the Shortwave URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage
//! backends, the shortening service, and the HTTP gateway.

pub mod error;
pub mod record;
pub mod shortener;
pub mod store;

pub use error::{ShortenError, StoreError};
pub use record::UrlRecord;
pub use shortener::Shortener;
pub use store::UrlStore;
