// SPDX-License-Identifier: AGPL-3.0-or-later

use dynamic_graphql::Enum;

/// Selects whether only published entries or drafts as well are returned.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationState {
    /// Only published entries.
    #[graphql(name = "LIVE")]
    Live,

    /// Published entries and drafts.
    #[graphql(name = "PREVIEW")]
    Preview,
}
