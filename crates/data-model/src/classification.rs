// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::borrow::Cow;

use crate::{ProviderCategory, ProviderId};

/// A rule marking some providers as directory-style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryRule {
    /// Matches the provider with exactly this identifier
    Exact(Cow<'static, str>),

    /// Matches every provider whose identifier starts with this prefix, so
    /// that `ldap` covers `ldapmain` and `ldapsecondary`
    Family(Cow<'static, str>),
}

impl DirectoryRule {
    #[must_use]
    pub fn exact(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Exact(name.into())
    }

    #[must_use]
    pub fn family(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self::Family(prefix.into())
    }

    /// The name or prefix this rule matches against
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Exact(name) => name,
            Self::Family(prefix) => prefix,
        }
    }

    #[must_use]
    pub fn matches(&self, id: &ProviderId) -> bool {
        match self {
            Self::Exact(_) => id.as_str() == self.pattern(),
            Self::Family(_) => id.as_str().starts_with(self.pattern()),
        }
    }
}

/// Static table deciding which providers get a sign-in button
///
/// The table lists the directory-style providers; everything it does not
/// match is button-based. The built-in rules are:
///
/// | Rule     | Pattern | Examples                        |
/// |----------|---------|---------------------------------|
/// | `Family` | `ldap`  | `ldap`, `ldapmain`, `ldapsecondary` |
/// | `Exact`  | `crowd` | `crowd`                         |
///
/// More rules can be added on top of those, but the built-in ones can't be
/// removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderClassification {
    rules: Vec<DirectoryRule>,
}

impl Default for ProviderClassification {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProviderClassification {
    /// The classification table compiled into the application
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: vec![DirectoryRule::family("ldap"), DirectoryRule::exact("crowd")],
        }
    }

    /// Add a directory rule to the table
    #[must_use]
    pub fn with_rule(mut self, rule: DirectoryRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[DirectoryRule] {
        &self.rules
    }

    /// Find the first rule classifying this provider as directory-style
    #[must_use]
    pub fn matching_rule(&self, id: &ProviderId) -> Option<&DirectoryRule> {
        self.rules.iter().find(|rule| rule.matches(id))
    }

    #[must_use]
    pub fn category(&self, id: &ProviderId) -> ProviderCategory {
        if self.matching_rule(id).is_some() {
            ProviderCategory::Directory
        } else {
            ProviderCategory::Button
        }
    }

    #[must_use]
    pub fn is_button_based(&self, id: &ProviderId) -> bool {
        self.category(id).is_button()
    }
}

impl Extend<DirectoryRule> for ProviderClassification {
    fn extend<T: IntoIterator<Item = DirectoryRule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}
