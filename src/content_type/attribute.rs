// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

/// Storage type of a content type attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// Short text.
    String,
    /// Long plain text.
    Text,
    /// Long text with markup.
    RichText,
    /// Email address.
    Email,
    /// Hashed password.
    Password,
    /// Url-friendly identifier derived from another attribute.
    Uid,
    /// One value out of a fixed list.
    Enumeration,
    /// True or false.
    Boolean,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInteger,
    /// Floating point number.
    Float,
    /// Decimal number with fixed precision.
    Decimal,
    /// Arbitrary JSON document.
    Json,
    /// Calendar date without time.
    Date,
    /// Time of day without date.
    Time,
    /// Date and time.
    DateTime,
    /// Point in time, stored as date and time.
    Timestamp,
    /// Reference to entries of another content type.
    Relation,
    /// Uploaded files.
    Media,
    /// Reusable group of attributes.
    Component,
    /// List of components of varying kinds.
    DynamicZone,

    /// Type registered by a plugin, identified by its tag.
    Custom(String),
}

impl AttributeType {
    /// Returns the type tag as used in content type declarations.
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::String => "string",
            AttributeType::Text => "text",
            AttributeType::RichText => "richtext",
            AttributeType::Email => "email",
            AttributeType::Password => "password",
            AttributeType::Uid => "uid",
            AttributeType::Enumeration => "enumeration",
            AttributeType::Boolean => "boolean",
            AttributeType::Integer => "integer",
            AttributeType::BigInteger => "biginteger",
            AttributeType::Float => "float",
            AttributeType::Decimal => "decimal",
            AttributeType::Json => "json",
            AttributeType::Date => "date",
            AttributeType::Time => "time",
            AttributeType::DateTime => "datetime",
            AttributeType::Timestamp => "timestamp",
            AttributeType::Relation => "relation",
            AttributeType::Media => "media",
            AttributeType::Component => "component",
            AttributeType::DynamicZone => "dynamiczone",
            AttributeType::Custom(tag) => tag,
        }
    }

    /// Returns true for every type holding a plain value, that is everything except relations,
    /// media, components and dynamic zones.
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            AttributeType::Relation
                | AttributeType::Media
                | AttributeType::Component
                | AttributeType::DynamicZone
        )
    }
}

impl From<&str> for AttributeType {
    fn from(tag: &str) -> Self {
        match tag {
            "string" => AttributeType::String,
            "text" => AttributeType::Text,
            "richtext" => AttributeType::RichText,
            "email" => AttributeType::Email,
            "password" => AttributeType::Password,
            "uid" => AttributeType::Uid,
            "enumeration" => AttributeType::Enumeration,
            "boolean" => AttributeType::Boolean,
            "integer" => AttributeType::Integer,
            "biginteger" => AttributeType::BigInteger,
            "float" => AttributeType::Float,
            "decimal" => AttributeType::Decimal,
            "json" => AttributeType::Json,
            "date" => AttributeType::Date,
            "time" => AttributeType::Time,
            "datetime" => AttributeType::DateTime,
            "timestamp" => AttributeType::Timestamp,
            "relation" => AttributeType::Relation,
            "media" => AttributeType::Media,
            "component" => AttributeType::Component,
            "dynamiczone" => AttributeType::DynamicZone,
            other => AttributeType::Custom(other.to_owned()),
        }
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attribute of a content type.
///
/// Only the type and the uniqueness flag are of interest when building query fields, all other
/// attribute options are handled elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    attribute_type: AttributeType,
    unique: bool,
}

impl Attribute {
    /// Returns a non-unique attribute of the given type.
    pub fn new(attribute_type: impl Into<AttributeType>) -> Self {
        Self {
            attribute_type: attribute_type.into(),
            unique: false,
        }
    }

    /// Marks this attribute as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Storage type of this attribute.
    pub fn attribute_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    /// Returns true if values of this attribute are unique across all entities.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns true if this attribute holds a plain value.
    pub fn is_scalar(&self) -> bool {
        self.attribute_type.is_scalar()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Attribute, AttributeType};

    #[rstest]
    #[case("string", true)]
    #[case("biginteger", true)]
    #[case("datetime", true)]
    #[case("relation", false)]
    #[case("media", false)]
    #[case("component", false)]
    #[case("dynamiczone", false)]
    #[case("plugin::color-picker.color", true)]
    fn scalar_types(#[case] tag: &str, #[case] is_scalar: bool) {
        let attribute_type = AttributeType::from(tag);
        assert_eq!(attribute_type.is_scalar(), is_scalar);
        assert_eq!(attribute_type.as_str(), tag);
    }

    #[test]
    fn unique_flag() {
        let attribute = Attribute::new(AttributeType::Email);
        assert!(!attribute.is_unique());
        assert!(attribute.unique().is_unique());
    }
}
