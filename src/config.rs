// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Result;
use serde::{Deserialize, Deserializer};

/// Prefix of environment variables read by `Configuration::from_env`.
const ENV_PREFIX: &str = "CONTENT_GRAPHQL_";

/// Configuration object holding all variables which influence how the GraphQL schema is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// List of content type uids which will be exposed on the GraphQL API.
    ///
    /// When not set _all_ content types known to the provider are exposed (wildcard).
    pub supported_content_types: AllowList<String>,

    /// Maximum depth of incoming queries. No limit is applied when not set.
    pub depth_limit: Option<usize>,

    /// Maximum complexity of incoming queries. No limit is applied when not set.
    pub complexity_limit: Option<usize>,

    /// Enable schema introspection queries. Defaults to true.
    pub introspection: bool,
}

impl Configuration {
    /// Read configuration from environment variables prefixed with `CONTENT_GRAPHQL_`, for example
    /// `CONTENT_GRAPHQL_DEPTH_LIMIT=10`.
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            supported_content_types: AllowList::Wildcard,
            depth_limit: None,
            complexity_limit: None,
            introspection: true,
        }
    }
}

/// Set of values which are either explicitly allowed or all allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowList<T> {
    /// Allow all possible items.
    Wildcard,

    /// Allow only the given items.
    Set(Vec<T>),
}

impl<T> AllowList<T>
where
    T: PartialEq,
{
    /// Returns true if the item is allowed.
    pub fn contains(&self, item: &T) -> bool {
        match self {
            AllowList::Wildcard => true,
            AllowList::Set(items) => items.contains(item),
        }
    }
}

impl<T> Default for AllowList<T> {
    fn default() -> Self {
        Self::Wildcard
    }
}

impl<'de, T> Deserialize<'de> for AllowList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items: Vec<T> = Vec::deserialize(deserializer)?;

        if items.is_empty() {
            Ok(Self::Wildcard)
        } else {
            Ok(Self::Set(items))
        }
    }
}
