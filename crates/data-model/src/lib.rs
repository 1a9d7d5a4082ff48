// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

#![allow(clippy::module_name_repetitions)]

//! Types describing the identity providers offered on the sign-in page

mod button;
mod classification;
mod provider;

pub use self::{
    button::SignInButton,
    classification::{DirectoryRule, ProviderClassification},
    provider::{
        InvalidProviderCategoryError, InvalidProviderIdError, ProviderCategory, ProviderId,
    },
};
