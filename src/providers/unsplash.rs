//! Unsplash photo search
//!
//! Uses the official `/search/photos` endpoint.

use super::fields::{result_array, text, text_or_fallback};
use super::{ProviderId, PER_PAGE};
use crate::error::SearchError;
use crate::results::ImageRecord;
use serde_json::Value;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://api.unsplash.com";
pub const SEARCH_PATH: &str = "/search/photos";

pub fn query_params(term: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("query".to_string(), term.to_string());
    params.insert("per_page".to_string(), PER_PAGE.to_string());
    params
}

pub fn normalize(payload: &Value) -> Result<Vec<ImageRecord>, SearchError> {
    let id = ProviderId::Unsplash;
    let items = result_array(id, payload, &["results"])?;

    Ok(items
        .iter()
        .map(|item| {
            ImageRecord::new(
                id,
                text(item, &["links", "html"]),
                text(item, &["urls", "regular"]),
                text_or_fallback(id, item, &["alt_description"]),
                text(item, &["user", "name"]),
            )
        })
        .collect())
}
