//! Search orchestration module
//!
//! Resolves the provider, performs the single outbound request and
//! normalizes the payload into image records.

mod executor;

pub use executor::{Search, SearchOutcome, FETCH_FAILED_MESSAGE};
