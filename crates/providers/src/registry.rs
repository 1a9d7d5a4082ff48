// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::sync::Arc;

use signin_config::ProvidersConfig;
use signin_data_model::{InvalidProviderIdError, ProviderId};

/// Source of the identity providers enabled on the instance
pub trait ProviderRegistry: Send + Sync {
    /// The enabled providers, in display order
    fn enabled_providers(&self) -> Vec<ProviderId>;

    /// The label configured for this provider, if any
    fn custom_label(&self, _id: &ProviderId) -> Option<String> {
        None
    }
}

impl<T: ProviderRegistry + ?Sized> ProviderRegistry for &T {
    fn enabled_providers(&self) -> Vec<ProviderId> {
        (**self).enabled_providers()
    }

    fn custom_label(&self, id: &ProviderId) -> Option<String> {
        (**self).custom_label(id)
    }
}

impl<T: ProviderRegistry + ?Sized> ProviderRegistry for Arc<T> {
    fn enabled_providers(&self) -> Vec<ProviderId> {
        (**self).enabled_providers()
    }

    fn custom_label(&self, id: &ProviderId) -> Option<String> {
        (**self).custom_label(id)
    }
}

/// A fixed list of providers, usually loaded from the configuration file
#[derive(Debug, Clone, Default)]
pub struct StaticProviderRegistry {
    providers: Vec<(ProviderId, Option<String>)>,
}

impl StaticProviderRegistry {
    /// Create a registry with the given providers and no custom labels
    pub fn new(providers: impl IntoIterator<Item = ProviderId>) -> Self {
        Self {
            providers: providers.into_iter().map(|id| (id, None)).collect(),
        }
    }

    /// Add a provider with a custom label at the end of the list
    #[must_use]
    pub fn with_labelled_provider(mut self, id: ProviderId, label: impl Into<String>) -> Self {
        self.providers.push((id, Some(label.into())));
        self
    }

    /// Build the registry from the `providers` configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if one of the provider identifiers is invalid. This
    /// can't happen on a validated configuration.
    pub fn from_config(config: &ProvidersConfig) -> Result<Self, InvalidProviderIdError> {
        let providers = config
            .providers
            .iter()
            .map(|provider| {
                let id: ProviderId = provider.id.parse()?;
                Ok::<_, InvalidProviderIdError>((id, provider.label.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { providers })
    }
}

impl ProviderRegistry for StaticProviderRegistry {
    fn enabled_providers(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|(id, _)| id.clone()).collect()
    }

    fn custom_label(&self, id: &ProviderId) -> Option<String> {
        self.providers
            .iter()
            .find(|(candidate, _)| candidate == id)
            .and_then(|(_, label)| label.clone())
    }
}

#[cfg(test)]
mod tests {
    use signin_config::ProviderConfig;

    use super::*;

    #[test]
    fn test_registry_from_config() {
        let config = ProvidersConfig {
            providers: vec![
                ProviderConfig {
                    id: "twitter".to_owned(),
                    label: None,
                },
                ProviderConfig {
                    id: "github".to_owned(),
                    label: Some("GitHub Enterprise".to_owned()),
                },
            ],
            directory: Vec::new(),
        };

        let registry = StaticProviderRegistry::from_config(&config).unwrap();
        let ids: Vec<String> = registry
            .enabled_providers()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(ids, ["twitter", "github"]);

        let github: ProviderId = "github".parse().unwrap();
        let twitter: ProviderId = "twitter".parse().unwrap();
        assert_eq!(
            registry.custom_label(&github).as_deref(),
            Some("GitHub Enterprise")
        );
        assert_eq!(registry.custom_label(&twitter), None);
    }

    #[test]
    fn test_registry_from_invalid_config() {
        let config = ProvidersConfig {
            providers: vec![ProviderConfig {
                id: String::new(),
                label: None,
            }],
            directory: Vec::new(),
        };

        assert!(StaticProviderRegistry::from_config(&config).is_err());
    }

    fn count(registry: impl ProviderRegistry) -> usize {
        registry.enabled_providers().len()
    }

    #[test]
    fn test_shared_registry() {
        let registry = Arc::new(StaticProviderRegistry::new(["gitlab".parse().unwrap()]));

        assert_eq!(count(&*registry), 1);
        assert_eq!(count(Arc::clone(&registry)), 1);
    }
}
