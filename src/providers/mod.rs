//! Photo providers
//!
//! Each provider module knows how to build query parameters for a search
//! term and how to turn the provider's JSON payload into [`ImageRecord`]s.
//! The set of providers is closed; dispatch goes through [`ProviderId`].
//!
//! [`ImageRecord`]: crate::results::ImageRecord

mod descriptor;
mod fields;
mod registry;

pub mod flickr;
pub mod pexels;
pub mod pixabay;
pub mod unsplash;

pub use descriptor::*;
pub use registry::ProviderRegistry;

/// Number of images requested from every provider
pub const PER_PAGE: u32 = 12;
