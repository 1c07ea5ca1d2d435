//! The shortening service for the Shortwave URL shortener.
//!
//! [`UrlService`] orchestrates dedup by original URL, id generation with
//! collision avoidance, and persistence through a
//! [`UrlStore`](shortwave_core::UrlStore).

pub mod service;

pub use service::UrlService;
