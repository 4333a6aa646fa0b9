//! Search execution

use crate::error::{SearchError, UpstreamError};
use crate::network::HttpClient;
use crate::providers::ProviderRegistry;
use crate::results::ImageRecord;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Message shown to the user for any failed search
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch images. Please try again.";

/// What the page needs from a search: images, or a user-facing error
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub images: Vec<ImageRecord>,
    pub error: Option<String>,
}

/// Search executor
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Provider registry
    registry: Arc<ProviderRegistry>,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, registry: Arc<ProviderRegistry>) -> Self {
        Self { client, registry }
    }

    /// Search one provider for `term`, in the provider's result order.
    ///
    /// Makes exactly one request; there is no retry.
    pub async fn search(
        &self,
        term: &str,
        provider_id: &str,
    ) -> Result<Vec<ImageRecord>, SearchError> {
        let descriptor = self.registry.lookup(provider_id)?;
        let provider = descriptor.id;
        let start = Instant::now();

        info!("Searching {} for '{}'", provider, term);

        let response = self
            .client
            .execute(descriptor.request(term))
            .await
            .map_err(|e| {
                let source = UpstreamError::from(e);
                if source.is_timeout() {
                    warn!("Timeout for provider {}", provider);
                } else {
                    warn!("Request failed for {}: {}", provider, source);
                }
                SearchError::Upstream { provider, source }
            })?;

        if !response.is_success() {
            warn!("{} answered with HTTP {}", provider, response.status);
            return Err(SearchError::Upstream {
                provider,
                source: UpstreamError::Status(response.status),
            });
        }

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| SearchError::malformed(provider, format!("invalid JSON: {}", e)))?;

        let images = descriptor.normalize(&payload)?;

        debug!(
            "{} returned {} images in {:?}",
            provider,
            images.len(),
            start.elapsed()
        );

        Ok(images)
    }

    /// Run a search and fold any failure into the generic user-facing message
    pub async fn run(&self, term: &str, provider_id: &str) -> SearchOutcome {
        match self.search(term, provider_id).await {
            Ok(images) => SearchOutcome {
                images,
                error: None,
            },
            Err(e) => {
                if e.is_client_error() {
                    warn!("Rejected search: {}", e);
                } else {
                    error!("Error: {}", e);
                }
                SearchOutcome {
                    images: Vec::new(),
                    error: Some(FETCH_FAILED_MESSAGE.to_string()),
                }
            }
        }
    }
}
