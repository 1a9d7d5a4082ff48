// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

/// Settings of the sign-in page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignInConfig {
    /// Providers for which no sign-in button is shown, even if they are
    /// enabled.
    ///
    /// Names which don't match any enabled provider are ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_oauth_sign_in_sources: Vec<String>,
}

impl SignInConfig {
    /// Returns true if the configuration is the default one
    pub(crate) fn is_default(&self) -> bool {
        self.disabled_oauth_sign_in_sources.is_empty()
    }
}

impl ConfigurationSection for SignInConfig {
    const PATH: Option<&'static str> = Some("sign_in");
}

#[cfg(test)]
mod tests {
    use figment::{
        Figment, Jail,
        providers::{Env, Format, Yaml},
    };

    use super::*;

    #[test]
    fn load_config() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    sign_in:
                      disabled_oauth_sign_in_sources:
                        - github
                        - twitter
                ",
            )?;

            let config = Figment::new()
                .merge(Yaml::file("config.yaml"))
                .extract_inner::<SignInConfig>("sign_in")?;

            assert_eq!(
                config.disabled_oauth_sign_in_sources,
                vec!["github".to_owned(), "twitter".to_owned()]
            );

            Ok(())
        });
    }

    #[test]
    fn load_config_from_env() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "sign_in: {}")?;
            jail.set_env("SIGNIN_SIGN_IN__DISABLED_OAUTH_SIGN_IN_SOURCES", "[github]");

            let figment = Figment::new()
                .merge(Yaml::file("config.yaml"))
                .merge(Env::prefixed("SIGNIN_").split("__"));
            let config = SignInConfig::extract(&figment).unwrap();

            assert_eq!(
                config.disabled_oauth_sign_in_sources,
                vec!["github".to_owned()]
            );

            Ok(())
        });
    }

    #[test]
    fn empty_section() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "sign_in: {}")?;

            let config = Figment::new()
                .merge(Yaml::file("config.yaml"))
                .extract_inner::<SignInConfig>("sign_in")?;
            assert!(config.is_default());

            Ok(())
        });
    }
}
