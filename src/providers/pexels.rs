//! Pexels photo search

use super::fields::{result_array, text, text_or_fallback};
use super::{ProviderId, PER_PAGE};
use crate::error::SearchError;
use crate::results::ImageRecord;
use serde_json::Value;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://api.pexels.com";
pub const SEARCH_PATH: &str = "/v1/search";

pub fn query_params(term: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("query".to_string(), term.to_string());
    params.insert("per_page".to_string(), PER_PAGE.to_string());
    params
}

/// Pexels has no description field, so the photographer doubles as alt text
pub fn normalize(payload: &Value) -> Result<Vec<ImageRecord>, SearchError> {
    let id = ProviderId::Pexels;
    let items = result_array(id, payload, &["photos"])?;

    Ok(items
        .iter()
        .map(|item| {
            ImageRecord::new(
                id,
                text(item, &["url"]),
                text(item, &["src", "medium"]),
                text_or_fallback(id, item, &["photographer"]),
                text(item, &["photographer"]),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pexels_normalize() {
        let payload = json!({
            "page": 1,
            "per_page": 12,
            "photos": [
                {
                    "id": 2014422,
                    "url": "https://www.pexels.com/photo/2014422/",
                    "photographer": "Joey Farina",
                    "src": {
                        "original": "https://images.pexels.com/photos/2014422/orig.jpeg",
                        "medium": "https://images.pexels.com/photos/2014422/medium.jpeg"
                    }
                },
                {
                    "id": 7,
                    "url": "https://www.pexels.com/photo/7/",
                    "src": {"medium": "https://images.pexels.com/photos/7/medium.jpeg"}
                }
            ]
        });

        let images = normalize(&payload).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].page_url, "https://www.pexels.com/photo/2014422/");
        assert_eq!(
            images[0].image_src,
            "https://images.pexels.com/photos/2014422/medium.jpeg"
        );
        assert_eq!(images[0].alt_text, "Joey Farina");
        assert_eq!(images[0].photographer, "Joey Farina");
        assert_eq!(images[0].provider_label, "Pexels");
        assert_eq!(images[0].provider_home_url, "https://pexels.com");

        assert_eq!(images[1].alt_text, "Pexels image");
        assert_eq!(images[1].photographer, "");
    }

    #[test]
    fn test_pexels_empty_page() {
        let payload = json!({"page": 1, "photos": [], "total_results": 0});
        assert!(normalize(&payload).unwrap().is_empty());
    }
}
