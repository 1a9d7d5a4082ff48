// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::Error};
use serde_with::skip_serializing_none;
use signin_data_model::{DirectoryRule, ProviderId};

use crate::{
    ConfigurationSection,
    util::{ConfigurationError, annotate},
};

/// Identity providers configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProvidersConfig {
    /// Identity providers enabled on this instance, in the order in which
    /// they are shown on the sign-in page
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,

    /// Additional rules marking providers as directory-style, on top of the
    /// built-in `ldap*` and `crowd` ones.
    ///
    /// Directory-style providers have their own sign-in form and never get a
    /// sign-in button.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directory: Vec<DirectoryRuleConfig>,
}

impl ProvidersConfig {
    /// Returns true if the configuration is the default one
    pub(crate) fn is_default(&self) -> bool {
        self.providers.is_empty() && self.directory.is_empty()
    }

    /// The directory rules to add to the built-in classification
    #[must_use]
    pub fn directory_rules(&self) -> Vec<DirectoryRule> {
        self.directory
            .iter()
            .map(DirectoryRuleConfig::to_rule)
            .collect()
    }
}

impl ConfigurationSection for ProvidersConfig {
    const PATH: Option<&'static str> = Some("providers");

    fn validate(&self, figment: &figment::Figment) -> Result<(), ConfigurationError> {
        let root = Self::PATH.unwrap_or_default();
        let mut seen = HashSet::new();

        for (index, provider) in self.providers.iter().enumerate() {
            let index = index.to_string();
            let path = [root, "providers", index.as_str(), "id"];

            if provider.id.parse::<ProviderId>().is_err() {
                return Err(annotate(
                    figment,
                    &path,
                    figment::Error::custom(
                        "Provider identifiers must be non-empty and must not contain whitespace",
                    ),
                )
                .into());
            }

            if !seen.insert(provider.id.as_str()) {
                return Err(annotate(
                    figment,
                    &path,
                    figment::Error::custom(format!(
                        "Provider {:?} is configured more than once",
                        provider.id
                    )),
                )
                .into());
            }
        }

        for (index, rule) in self.directory.iter().enumerate() {
            let index = index.to_string();
            let pattern = rule.pattern();
            if pattern.is_empty() || pattern.chars().any(char::is_whitespace) {
                return Err(annotate(
                    figment,
                    &[root, "directory", index.as_str()],
                    figment::Error::custom(
                        "Directory rule patterns must be non-empty and must not contain whitespace",
                    ),
                )
                .into());
            }
        }

        Ok(())
    }
}

/// Configuration of a single identity provider
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProviderConfig {
    /// The provider identifier, like `github` or `ldapmain`
    pub id: String,

    /// The text displayed on the sign-in button.
    ///
    /// Defaults to a built-in name for well-known providers, or to the
    /// titleized identifier.
    pub label: Option<String>,
}

/// A rule marking some providers as directory-style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryRuleConfig {
    /// `exact`: matches the provider with exactly this identifier
    Exact(String),

    /// `family`: matches all the providers whose identifier starts with this
    /// prefix
    Family(String),
}

impl DirectoryRuleConfig {
    fn pattern(&self) -> &str {
        match self {
            Self::Exact(pattern) | Self::Family(pattern) => pattern,
        }
    }

    /// Convert this configuration entry to a classification rule
    #[must_use]
    pub fn to_rule(&self) -> DirectoryRule {
        match self {
            Self::Exact(name) => DirectoryRule::exact(name.clone()),
            Self::Family(prefix) => DirectoryRule::family(prefix.clone()),
        }
    }
}
