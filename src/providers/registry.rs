//! Provider registry built from configuration

use super::descriptor::{ProviderDescriptor, ProviderId};
use crate::config::ProvidersSettings;
use crate::error::SearchError;

/// Immutable table of the four provider descriptors
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    /// Indexed by `ProviderId::index`
    descriptors: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    /// Build the registry from explicit provider settings
    pub fn from_settings(settings: &ProvidersSettings) -> Self {
        let descriptors = ProviderId::ALL
            .into_iter()
            .map(|id| {
                let provider = settings.get(id);
                let descriptor =
                    ProviderDescriptor::new(id, provider.api_key.clone().unwrap_or_default());
                match provider.base_url {
                    Some(ref base_url) => descriptor.with_base_url(base_url),
                    None => descriptor,
                }
            })
            .collect();

        Self { descriptors }
    }

    /// Resolve a provider id string
    pub fn lookup(&self, provider_id: &str) -> Result<&ProviderDescriptor, SearchError> {
        let id: ProviderId = provider_id.parse()?;
        Ok(self.get(id))
    }

    /// Get the descriptor for a known provider
    pub fn get(&self, id: ProviderId) -> &ProviderDescriptor {
        &self.descriptors[id.index()]
    }

    /// All descriptors, in display order
    pub fn iter(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.descriptors.iter()
    }

    /// Providers with no credential configured
    pub fn missing_credentials(&self) -> Vec<ProviderId> {
        self.iter()
            .filter(|d| !d.has_credential())
            .map(|d| d.id)
            .collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::from_settings(&ProvidersSettings::default())
    }
}
