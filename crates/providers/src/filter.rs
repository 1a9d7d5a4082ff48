// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::collections::HashSet;

use signin_config::ProvidersConfig;
use signin_data_model::{
    InvalidProviderIdError, ProviderCategory, ProviderClassification, ProviderId, SignInButton,
};
use tracing::debug;

use crate::{ProviderRegistry, SignInSettings, StaticProviderRegistry};

/// Decides which of the enabled providers get a sign-in button
///
/// Both the registry and the settings are queried on every call, nothing is
/// cached here.
#[derive(Debug, Clone)]
pub struct ProviderFilter<R, S> {
    registry: R,
    settings: S,
    classification: ProviderClassification,
}

impl<S: SignInSettings> ProviderFilter<StaticProviderRegistry, S> {
    /// Build a filter over the providers of the configuration file, with its
    /// extra directory rules added to the built-in classification
    ///
    /// # Errors
    ///
    /// Returns an error if one of the provider identifiers is invalid
    pub fn from_config(
        config: &ProvidersConfig,
        settings: S,
    ) -> Result<Self, InvalidProviderIdError> {
        let registry = StaticProviderRegistry::from_config(config)?;
        let mut classification = ProviderClassification::builtin();
        classification.extend(config.directory_rules());

        Ok(Self::new(registry, settings).with_classification(classification))
    }
}

impl<R: ProviderRegistry, S: SignInSettings> ProviderFilter<R, S> {
    /// Create a filter using the built-in classification
    pub fn new(registry: R, settings: S) -> Self {
        Self {
            registry,
            settings,
            classification: ProviderClassification::builtin(),
        }
    }

    /// Replace the classification table
    #[must_use]
    pub fn with_classification(mut self, classification: ProviderClassification) -> Self {
        self.classification = classification;
        self
    }

    /// The classification table in use
    pub fn classification(&self) -> &ProviderClassification {
        &self.classification
    }

    fn providers_in(&self, category: ProviderCategory) -> Vec<ProviderId> {
        self.registry
            .enabled_providers()
            .into_iter()
            .filter(|id| self.classification.category(id) == category)
            .collect()
    }

    fn enabled_buttons(&self) -> Vec<ProviderId> {
        let disabled: HashSet<String> = self
            .settings
            .disabled_oauth_sign_in_sources()
            .into_iter()
            .collect();

        self.button_based_providers()
            .into_iter()
            .filter(|id| !disabled.contains(id.as_str()))
            .collect()
    }

    /// The enabled providers which are rendered as buttons, in their original
    /// order. The administrator settings are not applied here.
    #[tracing::instrument(name = "sign_in.providers.button_based", skip_all)]
    pub fn button_based_providers(&self) -> Vec<ProviderId> {
        let providers = self.providers_in(ProviderCategory::Button);
        debug!(count = providers.len(), "Listed button-based providers");
        providers
    }

    /// The button-based providers which are not disabled in the sign-in
    /// settings
    #[tracing::instrument(name = "sign_in.providers.enabled_button_based", skip_all)]
    pub fn enabled_button_based_providers(&self) -> Vec<String> {
        let providers: Vec<String> = self
            .enabled_buttons()
            .into_iter()
            .map(String::from)
            .collect();
        debug!(
            count = providers.len(),
            "Listed enabled button-based providers"
        );
        providers
    }

    /// Whether at least one sign-in button is shown
    pub fn button_based_providers_enabled(&self) -> bool {
        !self.enabled_button_based_providers().is_empty()
    }

    /// The enabled providers which have their own sign-in form, in their
    /// original order
    ///
    /// The disabled sign-in sources don't apply to them.
    #[tracing::instrument(name = "sign_in.providers.directory", skip_all)]
    pub fn directory_providers(&self) -> Vec<ProviderId> {
        let providers = self.providers_in(ProviderCategory::Directory);
        debug!(count = providers.len(), "Listed directory-style providers");
        providers
    }

    /// Whether at least one directory-style provider is enabled
    pub fn directory_providers_enabled(&self) -> bool {
        !self.directory_providers().is_empty()
    }

    /// The text shown for this provider: the configured label, else the
    /// built-in name of the provider
    pub fn label_for(&self, id: &ProviderId) -> String {
        self.registry
            .custom_label(id)
            .unwrap_or_else(|| id.default_label())
    }

    /// The sign-in buttons to render, in order
    #[tracing::instrument(name = "sign_in.providers.buttons", skip_all)]
    pub fn buttons(&self) -> Vec<SignInButton> {
        let buttons: Vec<SignInButton> = self
            .enabled_buttons()
            .into_iter()
            .map(|id| SignInButton {
                label: self.label_for(&id),
                has_icon: id.has_builtin_icon(),
                id: id.into(),
            })
            .collect();
        debug!(count = buttons.len(), "Computed sign-in buttons");
        buttons
    }
}
