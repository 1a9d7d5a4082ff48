// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use figment::Figment;
use signin_config::{ConfigurationSection, RootConfig};
use signin_providers::ProviderFilter;
use tokio::io::AsyncWriteExt;
use tracing::{info, info_span, warn};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Dump the current config as YAML
    Dump {
        /// The path to the config file to dump
        ///
        /// If not specified, the config will be written to stdout
        #[clap(short, long)]
        output: Option<Utf8PathBuf>,
    },

    /// Check a config file
    Check,
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::Dump { output } => {
                let _span = info_span!("cli.config.dump").entered();

                let config = RootConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
                let config = dump(&config)?;

                if let Some(output) = output {
                    info!("Writing configuration to {output:?}");
                    let mut file = tokio::fs::File::create(output).await?;
                    file.write_all(config.as_bytes()).await?;
                } else {
                    info!("Writing configuration to standard output");
                    tokio::io::stdout().write_all(config.as_bytes()).await?;
                }
            }

            SC::Check => {
                let _span = info_span!("cli.config.check").entered();

                let config = RootConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
                for warning in lint(&config)? {
                    warn!("{warning}");
                }
                info!("Configuration file looks good");
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn dump(config: &RootConfig) -> anyhow::Result<String> {
    serde_yaml::to_string(config).context("failed to serialize the configuration")
}

/// Look for settings which are valid but most likely not what the
/// administrator intended
fn lint(config: &RootConfig) -> anyhow::Result<Vec<String>> {
    let filter = ProviderFilter::from_config(&config.providers, &config.sign_in)
        .context("invalid provider in the configuration")?;

    let button_based: Vec<String> = filter
        .button_based_providers()
        .into_iter()
        .map(String::from)
        .collect();

    let mut warnings: Vec<String> = config
        .sign_in
        .disabled_oauth_sign_in_sources
        .iter()
        .filter(|source| !button_based.contains(source))
        .map(|source| {
            format!(
                "The disabled sign-in source {source:?} (`sign_in.disabled_oauth_sign_in_sources`) does not match any enabled button-based provider"
            )
        })
        .collect();

    if !button_based.is_empty() && !filter.button_based_providers_enabled() {
        warnings.push(
            "All the button-based providers are disabled, no sign-in button will be shown"
                .to_owned(),
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use signin_config::{DirectoryRuleConfig, ProviderConfig, ProvidersConfig, SignInConfig};

    use super::*;

    fn config(providers: &[&str], disabled: &[&str]) -> RootConfig {
        RootConfig {
            providers: ProvidersConfig {
                providers: providers
                    .iter()
                    .map(|&id| ProviderConfig {
                        id: id.to_owned(),
                        label: None,
                    })
                    .collect(),
                directory: Vec::new(),
            },
            sign_in: SignInConfig {
                disabled_oauth_sign_in_sources: disabled.iter().map(|&s| s.to_owned()).collect(),
            },
        }
    }

    #[test]
    fn lint_clean_config() {
        let warnings = lint(&config(&["twitter", "github"], &["github"])).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn lint_unknown_disabled_source() {
        let warnings = lint(&config(&["twitter", "ldapmain"], &["ldapmain", "gitlab"])).unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("\"ldapmain\""));
        assert!(warnings[1].contains("\"gitlab\""));
    }

    #[test]
    fn lint_everything_disabled() {
        let warnings = lint(&config(&["twitter", "github"], &["github", "twitter"])).unwrap();
        assert_eq!(
            warnings,
            ["All the button-based providers are disabled, no sign-in button will be shown"]
        );
    }

    #[test]
    fn dump_can_be_loaded_back() {
        let mut config = config(&["github", "ldapmain"], &["github"]);
        config.providers.providers[0].label = Some("GitHub Enterprise".to_owned());
        config.providers.directory = vec![DirectoryRuleConfig::Family("kerberos".to_owned())];

        let dumped = dump(&config).unwrap();
        let loaded: RootConfig = serde_yaml::from_str(&dumped).unwrap();

        let providers: Vec<(&str, Option<&str>)> = loaded
            .providers
            .providers
            .iter()
            .map(|p| (p.id.as_str(), p.label.as_deref()))
            .collect();
        assert_eq!(
            providers,
            [("github", Some("GitHub Enterprise")), ("ldapmain", None)]
        );
        assert_eq!(loaded.providers.directory, config.providers.directory);
        assert_eq!(loaded.sign_in, config.sign_in);
    }
}
