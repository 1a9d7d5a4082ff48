// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use figment::Figment;
use serde::de::DeserializeOwned;

/// Error returned when a configuration section fails to load or validate
pub type ConfigurationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Trait implemented by all configuration sections, to load them on their own
/// or as part of the whole configuration.
pub trait ConfigurationSection: Sized + DeserializeOwned {
    /// Where this section lives relative to the root, or `None` for the root
    /// itself.
    const PATH: Option<&'static str> = None;

    /// Validate the configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    fn validate(&self, _figment: &Figment) -> Result<(), ConfigurationError> {
        Ok(())
    }

    /// Extract and validate the section from a [`Figment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration could not be loaded or is invalid
    fn extract(figment: &Figment) -> Result<Self, ConfigurationError> {
        let this: Self = if let Some(path) = Self::PATH {
            figment.extract_inner(path)?
        } else {
            figment.extract()?
        };

        this.validate(figment)?;
        Ok(this)
    }
}

/// Extension trait for [`ConfigurationSection`] to fall back to the default
/// value when the section is absent from the [`Figment`].
pub trait ConfigurationSectionExt: ConfigurationSection + Default {
    /// Extract the section from the given [`Figment`], or return the default
    /// value if it is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section is invalid.
    fn extract_or_default(figment: &Figment) -> Result<Self, ConfigurationError> {
        let this: Self = if let Some(path) = Self::PATH {
            if !figment.contains(path) {
                return Ok(Self::default());
            }

            figment.extract_inner(path)?
        } else {
            figment.extract()?
        };

        this.validate(figment)?;
        Ok(this)
    }
}

impl<T: ConfigurationSection + Default> ConfigurationSectionExt for T {}

/// Point a validation error at the given path, with the metadata of the
/// source which defined its parent.
pub(crate) fn annotate(
    figment: &Figment,
    path: &[&str],
    mut error: figment::Error,
) -> figment::Error {
    if let Some((_, parent)) = path.split_last() {
        error.metadata = figment.find_metadata(&parent.join(".")).cloned();
    }
    error.profile = Some(figment::Profile::Default);
    error.path = path.iter().map(|segment| (*segment).to_owned()).collect();
    error
}
