//! Result types
//!
//! Every provider's payload is normalized into the same [`ImageRecord`] shape.

mod types;

pub use types::*;
