//! HTTP networking module
//!
//! Provides the HTTP client used to call photo providers.

mod client;

pub use client::HttpClient;
