//! Storage backends for the Shortwave URL shortener.
//!
//! Two [`UrlStore`](shortwave_core::UrlStore) implementations are
//! provided: [`MemoryStore`], which keeps records in process memory only,
//! and [`FileStore`], which additionally writes the full record set
//! through to a JSON file on every create and reloads it on open.

mod index;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
