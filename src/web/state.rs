//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::providers::{ProviderId, ProviderRegistry};
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Provider registry
    pub registry: Arc<ProviderRegistry>,
    /// Search executor
    pub search: Arc<Search>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        registry: ProviderRegistry,
        client: HttpClient,
    ) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);
        let registry = Arc::new(registry);
        let search = Arc::new(Search::new(client, registry.clone()));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings,
            registry,
            search,
            templates,
        })
    }

    /// Build everything from settings alone
    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let registry = ProviderRegistry::from_settings(&settings.providers);
        Self::new(settings, registry, client)
    }

    /// Provider preselected on an empty form
    pub fn default_provider(&self) -> ProviderId {
        self.settings.server.default_provider
    }
}
