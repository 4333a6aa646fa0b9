//! HTTP client for making requests to photo providers

use crate::config::OutgoingSettings;
use crate::providers::{ProviderRequest, ProviderResponse};
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper with a bounded timeout and a fixed user agent
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = settings.timeout()?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            default_timeout: timeout,
        })
    }

    /// Execute a provider request
    pub async fn execute(&self, request: ProviderRequest) -> reqwest::Result<ProviderResponse> {
        self.execute_with_timeout(request, self.default_timeout).await
    }

    /// Execute a provider request with custom timeout
    pub async fn execute_with_timeout(
        &self,
        request: ProviderRequest,
        timeout: Duration,
    ) -> reqwest::Result<ProviderResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .timeout(timeout)
            .header("Accept", "application/json");

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Read the full body; normalization never sees partial data
    async fn parse_response(response: Response) -> reqwest::Result<ProviderResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ProviderResponse { status, text })
    }

    pub fn timeout(&self) -> Duration {
        self.default_timeout
    }
}

fn user_agent() -> String {
    format!("photo-search/{}", crate::VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new().unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_oversized_timeout_is_an_error() {
        let settings = OutgoingSettings {
            request_timeout: 1e30,
            ..Default::default()
        };
        assert!(HttpClient::with_settings(&settings).is_err());
    }

    #[tokio::test]
    async fn test_execute_sends_params_and_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("query", "red fox"))
            .and(header("Authorization", "secret"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"photos":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let request = ProviderRequest::get(format!("{}/v1/search", server.uri()))
            .param("query", "red fox")
            .header("Authorization", "secret");

        let response = client.execute(request).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.text, r#"{"photos":[]}"#);
    }

    #[tokio::test]
    async fn test_execute_reports_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.execute(ProviderRequest::get(server.uri())).await.unwrap();
        assert_eq!(response.status, 403);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .execute_with_timeout(
                ProviderRequest::get(server.uri()),
                Duration::from_millis(100),
            )
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }
}
