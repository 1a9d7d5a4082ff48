// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::{fmt::Write as _, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use figment::Figment;
use signin_config::{ConfigurationSection, RootConfig};
use signin_data_model::{ProviderId, SignInButton};
use signin_providers::{ProviderFilter, ProviderRegistry, SignInSettings};
use tokio::io::AsyncWriteExt;
use tracing::info_span;

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// List the sign-in buttons and the directory-style providers the
    /// sign-in page would show
    List {
        /// Output the list as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::List { json } => {
                let _span = info_span!("cli.providers.list").entered();

                let config = RootConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
                let filter = ProviderFilter::from_config(&config.providers, &config.sign_in)
                    .context("invalid provider in the configuration")?;

                let buttons = filter.buttons();
                let directory_providers = directory_labels(&filter);

                let output = if json {
                    let value = render_json(&buttons, &directory_providers);
                    let mut output = serde_json::to_string_pretty(&value)?;
                    output.push('\n');
                    output
                } else {
                    render_text(&buttons, &directory_providers)
                };

                tokio::io::stdout().write_all(output.as_bytes()).await?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// The enabled directory-style providers with their labels, in order
fn directory_labels<R: ProviderRegistry, S: SignInSettings>(
    filter: &ProviderFilter<R, S>,
) -> Vec<(ProviderId, String)> {
    filter
        .directory_providers()
        .into_iter()
        .map(|id| {
            let label = filter.label_for(&id);
            (id, label)
        })
        .collect()
}

fn render_json(
    buttons: &[SignInButton],
    directory_providers: &[(ProviderId, String)],
) -> serde_json::Value {
    let directory_providers: Vec<serde_json::Value> = directory_providers
        .iter()
        .map(|(id, label)| serde_json::json!({ "id": id, "label": label }))
        .collect();

    serde_json::json!({
        "buttons": buttons,
        "directory_providers": directory_providers,
    })
}

fn render_text(buttons: &[SignInButton], directory_providers: &[(ProviderId, String)]) -> String {
    let mut output = String::new();

    if buttons.is_empty() {
        output.push_str("No sign-in button enabled\n");
    } else {
        output.push_str("Sign-in buttons:\n");
        for button in buttons {
            let icon = if button.has_icon { " (icon)" } else { "" };
            let _ = writeln!(output, "  {}: {}{icon}", button.id, button.label);
        }
    }

    if !directory_providers.is_empty() {
        output.push_str("Directory-style providers:\n");
        for (id, label) in directory_providers {
            let _ = writeln!(output, "  {id}: {label}");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use signin_config::{ProviderConfig, ProvidersConfig, SignInConfig};

    use super::*;

    #[test]
    fn render_buttons_and_directories() {
        let buttons = [
            SignInButton {
                id: "github".to_owned(),
                label: "GitHub".to_owned(),
                has_icon: true,
            },
            SignInButton {
                id: "my_sso".to_owned(),
                label: "My Sso".to_owned(),
                has_icon: false,
            },
        ];
        let directories: [(ProviderId, String); 1] =
            [("ldapmain".parse().unwrap(), "Corporate LDAP".to_owned())];

        assert_eq!(
            render_text(&buttons, &directories),
            "Sign-in buttons:\n  github: GitHub (icon)\n  my_sso: My Sso\nDirectory-style providers:\n  ldapmain: Corporate LDAP\n"
        );
    }

    #[test]
    fn render_json_from_config() {
        let providers = ProvidersConfig {
            providers: vec![
                ProviderConfig {
                    id: "twitter".to_owned(),
                    label: None,
                },
                ProviderConfig {
                    id: "github".to_owned(),
                    label: Some("GitHub Enterprise".to_owned()),
                },
                ProviderConfig {
                    id: "ldapmain".to_owned(),
                    label: Some("Corporate LDAP".to_owned()),
                },
                ProviderConfig {
                    id: "ldapsecondary".to_owned(),
                    label: None,
                },
            ],
            directory: Vec::new(),
        };
        let sign_in = SignInConfig {
            disabled_oauth_sign_in_sources: vec!["twitter".to_owned()],
        };
        let filter = ProviderFilter::from_config(&providers, &sign_in).unwrap();

        assert_eq!(
            render_json(&filter.buttons(), &directory_labels(&filter)),
            json!({
                "buttons": [
                    { "id": "github", "label": "GitHub Enterprise", "has_icon": true },
                ],
                "directory_providers": [
                    { "id": "ldapmain", "label": "Corporate LDAP" },
                    { "id": "ldapsecondary", "label": "LDAP" },
                ],
            })
        );
    }

    #[test]
    fn render_json_nothing_enabled() {
        assert_eq!(
            render_json(&[], &[]),
            json!({ "buttons": [], "directory_providers": [] })
        );
    }

    #[test]
    fn render_nothing_enabled() {
        assert_eq!(render_text(&[], &[]), "No sign-in button enabled\n");
    }
}
