// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::Serialize;

/// A provider rendered as a one-click button on the sign-in page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInButton {
    /// The provider identifier, as used in the sign-in URL
    pub id: String,

    /// The text shown on the button
    pub label: String,

    /// Whether the sign-in page has an icon for this provider
    pub has_icon: bool,
}
