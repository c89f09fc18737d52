// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Value};

use crate::content_type::{Attribute, AttributeType, ContentType};

/// A content type with scalar, unique, relation and unmapped attributes which can be used in
/// tests.
pub fn restaurant() -> ContentType {
    ContentType::new(
        "api::restaurant.restaurant",
        "restaurant",
        vec![
            ("name", Attribute::new(AttributeType::String).unique()),
            ("slug", Attribute::new(AttributeType::Uid).unique()),
            ("stars", Attribute::new(AttributeType::Integer)),
            ("address", Attribute::new(AttributeType::Text)),
            ("founded", Attribute::new(AttributeType::Date).unique()),
            ("chef", Attribute::new(AttributeType::Relation).unique()),
            (
                "colour",
                Attribute::new(AttributeType::Custom("plugin::color".to_owned())).unique(),
            ),
        ],
    )
    .unwrap()
}

/// A small content type with a plural model name ending in "es".
pub fn dish() -> ContentType {
    ContentType::new(
        "api::dish.dish",
        "dish",
        vec![("title", Attribute::new(AttributeType::String))],
    )
    .unwrap()
}

/// Turn an object value into field arguments.
pub fn args(value: Value) -> IndexMap<Name, Value> {
    match value {
        Value::Object(fields) => fields,
        _ => panic!("Arguments need to be an object"),
    }
}
