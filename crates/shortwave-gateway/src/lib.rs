//! HTTP boundary for the Shortwave URL shortener.
//!
//! Thin adapters only: handlers validate and shape requests, the
//! [`Shortener`](shortwave_core::Shortener) behind [`state::AppState`]
//! does the work.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
