// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::TypeRef;
use async_graphql::indexmap::IndexMap;

use crate::content_type::AttributeType;
use crate::graphql::collaborators::ScalarMapper;
use crate::graphql::constants::ID_SCALAR;

/// GraphQL scalars of attribute types every table knows about.
const DEFAULT_SCALARS: [(&str, &str); 17] = [
    ("string", TypeRef::STRING),
    ("text", TypeRef::STRING),
    ("richtext", TypeRef::STRING),
    ("email", TypeRef::STRING),
    ("password", TypeRef::STRING),
    ("uid", TypeRef::STRING),
    ("enumeration", TypeRef::STRING),
    ("boolean", TypeRef::BOOLEAN),
    ("integer", TypeRef::INT),
    ("biginteger", "Long"),
    ("float", TypeRef::FLOAT),
    ("decimal", TypeRef::FLOAT),
    ("json", "JSON"),
    ("date", "Date"),
    ("time", "Time"),
    ("datetime", "DateTime"),
    ("timestamp", "DateTime"),
];

/// Scalars which are part of every GraphQL schema and don't need to be registered.
pub const BUILT_IN_SCALARS: [&str; 5] = [
    ID_SCALAR,
    TypeRef::STRING,
    TypeRef::INT,
    TypeRef::FLOAT,
    TypeRef::BOOLEAN,
];

/// Lookup table from attribute type tags to GraphQL scalars.
///
/// Attribute types which are not in the table have no GraphQL representation.
#[derive(Clone, Debug)]
pub struct ScalarTable {
    mappings: IndexMap<String, String>,
}

impl ScalarTable {
    /// Returns a table without any mappings.
    pub fn empty() -> Self {
        Self {
            mappings: IndexMap::new(),
        }
    }

    /// Adds or replaces the scalar of an attribute type tag.
    pub fn with_mapping(mut self, attribute_type: &str, scalar: &str) -> Self {
        self.mappings
            .insert(attribute_type.to_owned(), scalar.to_owned());
        self
    }
}

impl Default for ScalarTable {
    fn default() -> Self {
        DEFAULT_SCALARS
            .iter()
            .fold(Self::empty(), |table, (attribute_type, scalar)| {
                table.with_mapping(attribute_type, scalar)
            })
    }
}

impl ScalarMapper for ScalarTable {
    fn graphql_scalar(&self, attribute_type: &AttributeType) -> Option<String> {
        self.mappings.get(attribute_type.as_str()).cloned()
    }

    fn scalars(&self) -> Vec<String> {
        let mut scalars: Vec<String> = Vec::new();
        for scalar in self.mappings.values() {
            if !scalars.contains(scalar) {
                scalars.push(scalar.to_owned());
            }
        }
        scalars
    }
}
