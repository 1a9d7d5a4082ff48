// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod providers;
mod sign_in;

pub use self::{
    providers::{DirectoryRuleConfig, ProviderConfig, ProvidersConfig},
    sign_in::SignInConfig,
};
use crate::util::{ConfigurationError, ConfigurationSection};

/// Application configuration root
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RootConfig {
    /// Identity providers enabled on this instance
    #[serde(default, skip_serializing_if = "ProvidersConfig::is_default")]
    pub providers: ProvidersConfig,

    /// Settings of the sign-in page which administrators can change at
    /// runtime
    #[serde(default, skip_serializing_if = "SignInConfig::is_default")]
    pub sign_in: SignInConfig,
}

impl ConfigurationSection for RootConfig {
    fn validate(&self, figment: &figment::Figment) -> Result<(), ConfigurationError> {
        self.providers.validate(figment)?;
        self.sign_in.validate(figment)?;

        Ok(())
    }
}
