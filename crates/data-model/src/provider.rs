// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Human-readable names of the well-known providers
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("auth0", "Auth0"),
    ("authentiq", "Authentiq"),
    ("azure_oauth2", "Azure AD"),
    ("bitbucket", "Bitbucket"),
    ("cas3", "CAS"),
    ("crowd", "Atlassian Crowd"),
    ("facebook", "Facebook"),
    ("github", "GitHub"),
    ("gitlab", "GitLab.com"),
    ("google_oauth2", "Google"),
    ("kerberos", "Kerberos"),
    ("salesforce", "Salesforce"),
    ("saml", "SAML"),
    ("shibboleth", "Shibboleth"),
    ("twitter", "Twitter"),
];

/// Providers for which the sign-in page ships an icon
const PROVIDERS_WITH_ICONS: &[&str] = &[
    "authentiq",
    "azure_oauth2",
    "bitbucket",
    "facebook",
    "github",
    "gitlab",
    "google_oauth2",
    "twitter",
];

#[derive(Debug, Clone, Error)]
#[error("Invalid provider identifier {0:?}")]
pub struct InvalidProviderIdError(String);

/// The symbolic name of an identity provider integration, like `github` or
/// `ldapmain`
///
/// It is never empty and never contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);

impl ProviderId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label shown to users when nothing else is configured for this
    /// provider.
    ///
    /// Well-known providers have a fixed name and LDAP servers (`ldapmain`,
    /// `ldapsecondary`, ...) are all called `LDAP`. Anything else gets its
    /// identifier titleized: underscores and hyphens both separate words, so
    /// `my_sso` becomes `My Sso` and `openid-connect` becomes `Openid Connect`.
    #[must_use]
    pub fn default_label(&self) -> String {
        if self.0.starts_with("ldap") {
            return "LDAP".to_owned();
        }

        DEFAULT_LABELS
            .iter()
            .find(|(id, _)| *id == self.0)
            .map_or_else(|| titleize(&self.0), |(_, label)| (*label).to_owned())
    }

    /// Whether the sign-in page has a dedicated icon for this provider
    #[must_use]
    pub fn has_builtin_icon(&self) -> bool {
        PROVIDERS_WITH_ICONS.contains(&self.0.as_str())
    }
}

fn titleize(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl std::str::FromStr for ProviderId {
    type Err = InvalidProviderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for ProviderId {
    type Error = InvalidProviderIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(InvalidProviderIdError(value));
        }

        Ok(Self(value))
    }
}

impl From<ProviderId> for String {
    fn from(value: ProviderId) -> Self {
        value.0
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a provider is presented on the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderCategory {
    /// One-click sign-in button
    Button,

    /// Directory-style provider (LDAP, Crowd) which needs its own username and
    /// password form
    Directory,
}

impl ProviderCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Directory => "directory",
        }
    }

    /// Returns `true` if providers of this category are rendered as buttons
    #[must_use]
    pub fn is_button(self) -> bool {
        matches!(self, Self::Button)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid provider category {0:?}")]
pub struct InvalidProviderCategoryError(String);

impl std::str::FromStr for ProviderCategory {
    type Err = InvalidProviderCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(Self::Button),
            "directory" => Ok(Self::Directory),
            s => Err(InvalidProviderCategoryError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
