// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::sync::Arc;

use arc_swap::ArcSwap;
use signin_config::SignInConfig;
use tracing::info;

/// Source of the sign-in settings an administrator can change at runtime
pub trait SignInSettings: Send + Sync {
    /// Names of the sign-in sources which must not get a sign-in button
    fn disabled_oauth_sign_in_sources(&self) -> Vec<String>;
}

impl SignInSettings for SignInConfig {
    fn disabled_oauth_sign_in_sources(&self) -> Vec<String> {
        self.disabled_oauth_sign_in_sources.clone()
    }
}

impl<T: SignInSettings + ?Sized> SignInSettings for &T {
    fn disabled_oauth_sign_in_sources(&self) -> Vec<String> {
        (**self).disabled_oauth_sign_in_sources()
    }
}

impl<T: SignInSettings + ?Sized> SignInSettings for Arc<T> {
    fn disabled_oauth_sign_in_sources(&self) -> Vec<String> {
        (**self).disabled_oauth_sign_in_sources()
    }
}

/// Sign-in settings which can be replaced while the application is running
///
/// Clones share the same settings. Readers always see a complete snapshot,
/// either the one before or the one after a [`reload`](Self::reload).
#[derive(Debug, Clone)]
pub struct ReloadableSignInSettings {
    current: Arc<ArcSwap<SignInConfig>>,
}

impl ReloadableSignInSettings {
    /// Start with the given settings
    #[must_use]
    pub fn new(config: SignInConfig) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Replace the current settings
    #[tracing::instrument(name = "sign_in.settings.reload", skip_all)]
    pub fn reload(&self, config: SignInConfig) {
        info!(
            disabled = ?config.disabled_oauth_sign_in_sources,
            "Reloading sign-in settings"
        );
        self.current.store(Arc::new(config));
    }

    /// The settings currently in use
    #[must_use]
    pub fn snapshot(&self) -> Arc<SignInConfig> {
        self.current.load_full()
    }
}

impl Default for ReloadableSignInSettings {
    fn default() -> Self {
        Self::new(SignInConfig::default())
    }
}

impl SignInSettings for ReloadableSignInSettings {
    fn disabled_oauth_sign_in_sources(&self) -> Vec<String> {
        self.current.load().disabled_oauth_sign_in_sources.clone()
    }
}
