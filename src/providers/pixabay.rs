//! Pixabay photo search
//!
//! The API does not return a page link, so one is built from the hit id.

use super::fields::{result_array, text, text_or_fallback};
use super::{ProviderId, PER_PAGE};
use crate::error::SearchError;
use crate::results::ImageRecord;
use serde_json::Value;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://pixabay.com/api";

pub fn query_params(term: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("q".to_string(), term.to_string());
    params.insert("per_page".to_string(), PER_PAGE.to_string());
    params
}

pub fn page_url(hit_id: &str) -> String {
    format!("https://pixabay.com/photos/{}/", hit_id)
}

pub fn normalize(payload: &Value) -> Result<Vec<ImageRecord>, SearchError> {
    let id = ProviderId::Pixabay;
    let items = result_array(id, payload, &["hits"])?;

    Ok(items
        .iter()
        .map(|item| {
            ImageRecord::new(
                id,
                page_url(&text(item, &["id"])),
                text(item, &["webformatURL"]),
                text_or_fallback(id, item, &["tags"]),
                text(item, &["user"]),
            )
        })
        .collect())
}
