// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

mod config;
mod providers;

#[derive(Parser, Debug)]
enum Subcommand {
    /// Configuration-related commands
    Config(self::config::Options),

    /// Inspect the identity providers shown on the sign-in page
    Providers(self::providers::Options),
}

#[derive(Parser, Debug)]
#[command(version = crate::VERSION)]
pub struct Options {
    /// Path to the configuration file
    ///
    /// Can be repeated, later files take precedence. Defaults to the
    /// colon-separated list in `SIGNIN_CONFIG`, or `config.yaml`.
    #[arg(short, long, global = true, action = clap::ArgAction::Append)]
    config: Vec<Utf8PathBuf>,

    #[command(subcommand)]
    subcommand: Subcommand,
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as S;
        match self.subcommand {
            S::Config(c) => c.run(figment).await,
            S::Providers(c) => c.run(figment).await,
        }
    }

    /// Get a [`Figment`] instance with the configuration loaded
    pub fn figment(&self) -> Figment {
        let configs = if self.config.is_empty() {
            std::env::var("SIGNIN_CONFIG")
                .map(|config| config.split(':').map(Utf8PathBuf::from).collect())
                .unwrap_or_else(|_| vec!["config.yaml".into()])
        } else {
            self.config.clone()
        };

        configs
            .iter()
            .fold(Figment::new(), |f, path| f.admerge(Yaml::file(path)))
            .merge(Env::prefixed("SIGNIN_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use signin_config::{ConfigurationSection, RootConfig};

    use super::*;

    #[test]
    fn parse_global_config_flag() {
        let opts = Options::try_parse_from([
            "signin",
            "providers",
            "list",
            "--config",
            "a.yaml",
            "-c",
            "b.yaml",
        ])
        .unwrap();

        assert_eq!(
            opts.config,
            [Utf8PathBuf::from("a.yaml"), Utf8PathBuf::from("b.yaml")]
        );
        assert!(matches!(opts.subcommand, Subcommand::Providers(_)));
    }

    #[test]
    fn later_files_and_env_take_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "base.yaml",
                r"
                    providers:
                      providers:
                        - id: github
                    sign_in:
                      disabled_oauth_sign_in_sources: [github]
                ",
            )?;
            jail.create_file(
                "override.yaml",
                r"
                    providers:
                      providers:
                        - id: twitter
                ",
            )?;
            jail.set_env(
                "SIGNIN_SIGN_IN__DISABLED_OAUTH_SIGN_IN_SOURCES",
                "[twitter]",
            );

            let opts = Options::try_parse_from([
                "signin",
                "-c",
                "base.yaml",
                "-c",
                "override.yaml",
                "config",
                "check",
            ])
            .unwrap();
            let config = RootConfig::extract(&opts.figment()).unwrap();

            let ids: Vec<&str> = config
                .providers
                .providers
                .iter()
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(ids, ["github", "twitter"]);
            assert_eq!(config.sign_in.disabled_oauth_sign_in_sources, ["twitter"]);

            Ok(())
        });
    }
}
