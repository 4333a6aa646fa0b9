//! Photo-Search: one form, four photo providers
//!
//! Looks up Unsplash, Pexels, Pixabay or Flickr for a search term and
//! normalizes their different response shapes into a single image record.

pub mod config;
pub mod error;
pub mod network;
pub mod providers;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::SearchError;
pub use providers::{ProviderDescriptor, ProviderId, ProviderRegistry};
pub use results::ImageRecord;
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
