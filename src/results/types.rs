//! Result type definitions

use crate::providers::ProviderId;
use serde::{Deserialize, Serialize};

/// A single normalized image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Human-viewable page for the image
    pub page_url: String,
    /// Direct link to a displayable rendition
    pub image_src: String,
    /// Description, or `"<Provider> image"` when the provider has none
    pub alt_text: String,
    /// Attribution; may be empty
    pub photographer: String,
    pub provider_home_url: String,
    pub provider_label: String,
}

impl ImageRecord {
    /// Create a record with the provider's label and home URL filled in
    pub fn new(
        provider: ProviderId,
        page_url: String,
        image_src: String,
        alt_text: String,
        photographer: String,
    ) -> Self {
        Self {
            page_url,
            image_src,
            alt_text,
            photographer,
            provider_home_url: provider.home_url().to_string(),
            provider_label: provider.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_constants() {
        let record = ImageRecord::new(
            ProviderId::Pixabay,
            "https://pixabay.com/photos/1/".to_string(),
            "https://pixabay.com/get/1.jpg".to_string(),
            "tree".to_string(),
            String::new(),
        );
        assert_eq!(record.provider_label, "Pixabay");
        assert_eq!(record.provider_home_url, "https://pixabay.com");
        assert!(record.photographer.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let record = ImageRecord::new(
            ProviderId::Unsplash,
            "http://u/1".to_string(),
            "http://u/1.jpg".to_string(),
            "Unsplash image".to_string(),
            "Ada".to_string(),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["page_url"], "http://u/1");
        assert_eq!(value["image_src"], "http://u/1.jpg");
        assert_eq!(value["provider_label"], "Unsplash");
    }
}
