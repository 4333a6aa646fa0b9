//! Error types for provider lookups and searches

use crate::providers::ProviderId;
use thiserror::Error;

/// Failure of a single search
#[derive(Debug, Error)]
pub enum SearchError {
    /// The provider id is not one of the registered providers
    #[error("unknown provider: {0:?}")]
    UnknownProvider(String),

    /// The provider could not be reached or answered with a non-success status
    #[error("request to {provider} failed: {source}")]
    Upstream {
        provider: ProviderId,
        source: UpstreamError,
    },

    /// The provider answered, but not with the payload shape we expect
    #[error("malformed response from {provider}: {reason}")]
    MalformedResponse {
        provider: ProviderId,
        reason: String,
    },
}

impl SearchError {
    pub fn malformed(provider: ProviderId, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            reason: reason.into(),
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownProvider(_))
    }
}

/// Transport-level failure talking to a provider
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Request(reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),
}

/// The request URL carries query-string credentials, so it is dropped
impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e.without_url())
    }
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SearchError::UnknownProvider("flickrz".to_string());
        assert_eq!(err.to_string(), "unknown provider: \"flickrz\"");
        assert!(err.is_client_error());

        let err = SearchError::Upstream {
            provider: ProviderId::Pexels,
            source: UpstreamError::Status(401),
        };
        assert_eq!(err.to_string(), "request to pexels failed: HTTP status 401");
        assert!(!err.is_client_error());

        let err = SearchError::malformed(ProviderId::Pixabay, "missing `hits`");
        assert_eq!(
            err.to_string(),
            "malformed response from pixabay: missing `hits`"
        );
    }
}
