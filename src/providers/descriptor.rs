//! Provider identifiers, descriptors and request/response types

use super::{flickr, pexels, pixabay, unsplash};
use crate::error::SearchError;
use crate::results::ImageRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One of the supported photo providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Unsplash,
    Pexels,
    Pixabay,
    Flickr,
}

impl ProviderId {
    /// All providers, in the order they are offered to the user
    pub const ALL: [ProviderId; 4] = [
        ProviderId::Unsplash,
        ProviderId::Pexels,
        ProviderId::Pixabay,
        ProviderId::Flickr,
    ];

    /// Identifier used in forms and settings
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsplash => "unsplash",
            Self::Pexels => "pexels",
            Self::Pixabay => "pixabay",
            Self::Flickr => "flickr",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Self::Unsplash => "Unsplash",
            Self::Pexels => "Pexels",
            Self::Pixabay => "Pixabay",
            Self::Flickr => "Flickr",
        }
    }

    /// The provider's public website
    pub fn home_url(self) -> &'static str {
        match self {
            Self::Unsplash => "https://unsplash.com",
            Self::Pexels => "https://pexels.com",
            Self::Pixabay => "https://pixabay.com",
            Self::Flickr => "https://flickr.com",
        }
    }

    /// Environment variable holding the credential
    pub fn credential_env(self) -> &'static str {
        match self {
            Self::Unsplash => "UNSPLASH_ACCESS_KEY",
            Self::Pexels => "PEXELS_API_KEY",
            Self::Pixabay => "PIXABAY_API_KEY",
            Self::Flickr => "FLICKR_API_KEY",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Unsplash => unsplash::BASE_URL,
            Self::Pexels => pexels::BASE_URL,
            Self::Pixabay => pixabay::BASE_URL,
            Self::Flickr => flickr::BASE_URL,
        }
    }

    pub fn search_path(self) -> &'static str {
        match self {
            Self::Unsplash => unsplash::SEARCH_PATH,
            Self::Pexels => pexels::SEARCH_PATH,
            Self::Pixabay | Self::Flickr => "",
        }
    }

    pub fn credential_placement(self) -> CredentialPlacement {
        match self {
            Self::Pexels => CredentialPlacement::AuthHeader,
            Self::Flickr => CredentialPlacement::QueryParam("api_key"),
            Self::Unsplash | Self::Pixabay => CredentialPlacement::QueryParam("key"),
        }
    }

    /// Alt text used when a result carries no description
    pub fn fallback_alt(self) -> String {
        format!("{} image", self.label())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SearchError::UnknownProvider(s.to_string()))
    }
}

/// Where the credential goes on the outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPlacement {
    /// Query parameter with the given name
    QueryParam(&'static str),
    /// Raw value in the `Authorization` header
    AuthHeader,
}

/// Everything needed to query one provider
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    pub base_url: String,
    pub search_path: String,
    /// May be empty; the provider then rejects the request
    pub credential: String,
    pub credential_placement: CredentialPlacement,
}

impl ProviderDescriptor {
    /// Descriptor pointing at the provider's public API
    pub fn new(id: ProviderId, credential: impl Into<String>) -> Self {
        Self {
            id,
            base_url: id.default_base_url().to_string(),
            search_path: id.search_path().to_string(),
            credential: credential.into(),
            credential_placement: id.credential_placement(),
        }
    }

    /// Replace the API base URL, keeping the search path
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path)
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }

    /// Provider-specific query parameters for a search term
    pub fn build_query_params(&self, term: &str) -> HashMap<String, String> {
        match self.id {
            ProviderId::Unsplash => unsplash::query_params(term),
            ProviderId::Pexels => pexels::query_params(term),
            ProviderId::Pixabay => pixabay::query_params(term),
            ProviderId::Flickr => flickr::query_params(term),
        }
    }

    /// Build the outbound request, credential included
    pub fn request(&self, term: &str) -> ProviderRequest {
        let mut request = ProviderRequest::get(self.url());
        request.params = self.build_query_params(term);

        if self.has_credential() {
            request = match self.credential_placement {
                CredentialPlacement::QueryParam(name) => request.param(name, &self.credential),
                CredentialPlacement::AuthHeader => {
                    request.header("Authorization", &self.credential)
                }
            };
        }

        request
    }

    /// Map a raw payload to image records, preserving order
    pub fn normalize(&self, payload: &serde_json::Value) -> Result<Vec<ImageRecord>, SearchError> {
        match self.id {
            ProviderId::Unsplash => unsplash::normalize(payload),
            ProviderId::Pexels => pexels::normalize(payload),
            ProviderId::Pixabay => pixabay::normalize(payload),
            ProviderId::Flickr => flickr::normalize(payload),
        }
    }
}

/// HTTP GET request to be sent to a provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl ProviderRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from a provider
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
