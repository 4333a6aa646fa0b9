//! Flickr photo search
//!
//! Uses `flickr.photos.search` with the plain JSON format. Both the page link
//! and the image URL are assembled from the photo's owner, id, server and
//! secret. The owner is an account id (e.g. `12037949754@N01`), not a display
//! name; resolving names would cost one extra call per photo.

use super::fields::{result_array, text, text_or_fallback};
use super::{ProviderId, PER_PAGE};
use crate::error::SearchError;
use crate::results::ImageRecord;
use serde_json::Value;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://api.flickr.com/services/rest";

pub fn query_params(term: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("method".to_string(), "flickr.photos.search".to_string());
    params.insert("text".to_string(), term.to_string());
    params.insert("per_page".to_string(), PER_PAGE.to_string());
    params.insert("format".to_string(), "json".to_string());
    params.insert("nojsoncallback".to_string(), "1".to_string());
    params
}

pub fn page_url(owner: &str, photo_id: &str) -> String {
    format!("https://www.flickr.com/photos/{}/{}", owner, photo_id)
}

/// Medium 400px rendition (`_w` suffix)
pub fn image_src(server: &str, photo_id: &str, secret: &str) -> String {
    format!(
        "https://live.staticflickr.com/{}/{}_{}_w.jpg",
        server, photo_id, secret
    )
}

pub fn normalize(payload: &Value) -> Result<Vec<ImageRecord>, SearchError> {
    let id = ProviderId::Flickr;

    // Flickr reports API errors with a 200 status and `stat: fail`
    if payload.get("stat").and_then(|s| s.as_str()) == Some("fail") {
        let message = text(payload, &["message"]);
        return Err(SearchError::malformed(
            id,
            format!("stat=fail: {}", message),
        ));
    }

    let items = result_array(id, payload, &["photos", "photo"])?;

    Ok(items
        .iter()
        .map(|item| {
            let owner = text(item, &["owner"]);
            let photo_id = text(item, &["id"]);

            ImageRecord::new(
                id,
                page_url(&owner, &photo_id),
                image_src(
                    &text(item, &["server"]),
                    &photo_id,
                    &text(item, &["secret"]),
                ),
                text_or_fallback(id, item, &["title"]),
                owner,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flickr_params() {
        let params = query_params("cat");
        assert_eq!(params.len(), 5);
        assert_eq!(params["method"], "flickr.photos.search");
        assert_eq!(params["text"], "cat");
        assert_eq!(params["per_page"], "12");
        assert_eq!(params["format"], "json");
        assert_eq!(params["nojsoncallback"], "1");
    }

    #[test]
    fn test_flickr_normalize() {
        let payload = json!({
            "photos": {
                "page": 1,
                "pages": 10,
                "perpage": 12,
                "photo": [
                    {"owner": "42", "id": "99", "server": "5", "secret": "abc", "title": "Cat"}
                ]
            },
            "stat": "ok"
        });

        let images = normalize(&payload).unwrap();
        assert_eq!(
            images,
            vec![ImageRecord {
                page_url: "https://www.flickr.com/photos/42/99".to_string(),
                image_src: "https://live.staticflickr.com/5/99_abc_w.jpg".to_string(),
                alt_text: "Cat".to_string(),
                photographer: "42".to_string(),
                provider_home_url: "https://flickr.com".to_string(),
                provider_label: "Flickr".to_string(),
            }]
        );
    }

    #[test]
    fn test_flickr_untitled_photo() {
        let payload = json!({
            "photos": {"photo": [
                {"owner": "1@N01", "id": "7", "server": "65535", "secret": "f00", "title": ""}
            ]},
            "stat": "ok"
        });
        let images = normalize(&payload).unwrap();
        assert_eq!(images[0].alt_text, "Flickr image");
        assert_eq!(images[0].photographer, "1@N01");
    }

    #[test]
    fn test_flickr_failure_payload() {
        let payload = json!({"stat": "fail", "code": 100, "message": "Invalid API Key (Key has invalid format)"});
        let err = normalize(&payload).unwrap_err();
        assert!(err.to_string().contains("Invalid API Key"));
    }
}
