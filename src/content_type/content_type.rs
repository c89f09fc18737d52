// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::indexmap::IndexMap;

use crate::content_type::Attribute;
use crate::errors::ContentTypeError;

/// Description of an entity kind: its uid, model name and attributes.
///
/// Attributes keep their declaration order so that everything derived from a content type, like
/// argument lists of query fields, is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentType {
    uid: String,
    model_name: String,
    attributes: IndexMap<String, Attribute>,
}

impl ContentType {
    /// Returns a new content type.
    ///
    /// Fails when the uid is empty or contains whitespace or when the model name is empty.
    pub fn new(
        uid: &str,
        model_name: &str,
        attributes: Vec<(&str, Attribute)>,
    ) -> Result<Self, ContentTypeError> {
        if uid.is_empty() || uid.chars().any(char::is_whitespace) {
            return Err(ContentTypeError::InvalidUid(uid.to_owned()));
        }

        if model_name.is_empty() {
            return Err(ContentTypeError::EmptyModelName(uid.to_owned()));
        }

        let attributes = attributes
            .into_iter()
            .map(|(name, attribute)| (name.to_owned(), attribute))
            .collect();

        Ok(Self {
            uid: uid.to_owned(),
            model_name: model_name.to_owned(),
            attributes,
        })
    }

    /// Globally unique identifier, for example `api::restaurant.restaurant`.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Name of the model this content type describes.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &IndexMap<String, Attribute> {
        &self.attributes
    }

    /// Returns the attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
