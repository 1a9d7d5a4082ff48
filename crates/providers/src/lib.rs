// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

//! Selection of the identity providers shown on the sign-in page
//!
//! The [`ProviderFilter`] combines the providers enabled on the instance
//! ([`ProviderRegistry`]) with the sign-in sources an administrator disabled
//! ([`SignInSettings`]) to decide which ones get a one-click sign-in button.

mod filter;
mod registry;
mod settings;

pub use self::{
    filter::ProviderFilter,
    registry::{ProviderRegistry, StaticProviderRegistry},
    settings::{ReloadableSignInSettings, SignInSettings},
};
