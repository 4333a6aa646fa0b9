//! Settings structures for Photo-Search configuration

use crate::providers::ProviderId;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub providers: ProvidersSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Merge values from an arbitrary key lookup (the process environment in production)
    pub fn merge_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for id in ProviderId::ALL {
            if let Some(key) = lookup(id.credential_env()) {
                self.providers.get_mut(id).api_key = Some(key);
            }
        }
        if let Some(val) = lookup("PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("PHOTO_SEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("PHOTO_SEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }

    /// Check values that would otherwise fail late
    pub fn validate(&self) -> Result<()> {
        self.outgoing.timeout()?;

        for id in ProviderId::ALL {
            if let Some(ref base_url) = self.providers.get(id).base_url {
                Url::parse(base_url).map_err(|e| {
                    anyhow::anyhow!("providers.{}.base_url {:?} is invalid: {}", id, base_url, e)
                })?;
            }
        }

        Ok(())
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Directory served for stylesheets and other static assets
    pub static_dir: String,
    /// Provider preselected on the empty form
    pub default_provider: ProviderId,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            static_dir: "public".to_string(),
            default_provider: ProviderId::Unsplash,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl OutgoingSettings {
    /// Request timeout as a `Duration`; must be positive and representable
    pub fn timeout(&self) -> Result<Duration> {
        let secs = self.request_timeout;
        match Duration::try_from_secs_f64(secs) {
            Ok(timeout) if !timeout.is_zero() => Ok(timeout),
            _ => anyhow::bail!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                secs
            ),
        }
    }
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Per-provider credentials and endpoint overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersSettings {
    pub unsplash: ProviderSettings,
    pub pexels: ProviderSettings,
    pub pixabay: ProviderSettings,
    pub flickr: ProviderSettings,
}

impl ProvidersSettings {
    pub fn get(&self, id: ProviderId) -> &ProviderSettings {
        match id {
            ProviderId::Unsplash => &self.unsplash,
            ProviderId::Pexels => &self.pexels,
            ProviderId::Pixabay => &self.pixabay,
            ProviderId::Flickr => &self.flickr,
        }
    }

    pub fn get_mut(&mut self, id: ProviderId) -> &mut ProviderSettings {
        match id {
            ProviderId::Unsplash => &mut self.unsplash,
            ProviderId::Pexels => &mut self.pexels,
            ProviderId::Pixabay => &mut self.pixabay,
            ProviderId::Flickr => &mut self.flickr,
        }
    }
}

/// Settings for a single provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// API key or access token
    pub api_key: Option<String>,
    /// Replaces the provider's public API base URL
    pub base_url: Option<String>,
}
